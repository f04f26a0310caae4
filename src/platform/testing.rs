//! Test doubles for the client-provider seam and the query transport.
//!
//! Compiled into the library so downstream consumers can write
//! deterministic tests without network access.

use crate::error::PlatformError;
use crate::platform::{ClientProvider, QueryExecutor, QueryRequest, UserClient};
use crate::types::UserContext;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// User client returning a fixed context/error pair verbatim on every call.
pub struct FakeUserClient {
    context: UserContext,
    err: Option<PlatformError>,
}

impl FakeUserClient {
    pub fn new(context: UserContext, err: Option<PlatformError>) -> Self {
        Self { context, err }
    }
}

#[async_trait]
impl UserClient for FakeUserClient {
    async fn get_user_context(&self) -> Result<UserContext, PlatformError> {
        match &self.err {
            Some(err) => Err(err.clone()),
            None => Ok(self.context.clone()),
        }
    }
}

/// Provider whose `new_user_client` never fails and always yields a
/// [`FakeUserClient`] with the configured pair.
pub struct FakeClientProvider {
    context: UserContext,
    err: Option<PlatformError>,
}

impl FakeClientProvider {
    pub fn new(context: UserContext, err: Option<PlatformError>) -> Self {
        Self { context, err }
    }
}

impl ClientProvider for FakeClientProvider {
    fn new_user_client(&self) -> Result<Box<dyn UserClient>, PlatformError> {
        Ok(Box::new(FakeUserClient::new(
            self.context.clone(),
            self.err.clone(),
        )))
    }
}

/// Query executor replaying a scripted sequence of results.
///
/// Clones share the script and the call counter, so a test can hand one
/// clone to a client and keep another for invocation assertions. Panics
/// when the script runs dry; that is always a test bug.
#[derive(Clone)]
pub struct ScriptedExecutor {
    inner: Arc<ScriptInner>,
}

struct ScriptInner {
    script: Mutex<VecDeque<Result<Value, PlatformError>>>,
    calls: AtomicUsize,
}

impl ScriptedExecutor {
    pub fn new(script: Vec<Result<Value, PlatformError>>) -> Self {
        Self {
            inner: Arc::new(ScriptInner {
                script: Mutex::new(script.into()),
                calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Number of queries executed so far.
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryExecutor for ScriptedExecutor {
    async fn run(&self, _request: QueryRequest) -> Result<Value, PlatformError> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .script
            .lock()
            .expect("scripted executor lock poisoned")
            .pop_front()
            .expect("scripted executor ran out of queued results")
    }
}
