//! Platform domain: control-plane client, query transport seam, and the
//! client-provider abstraction.
//!
//! Everything that talks to the Orbital control plane goes through
//! [`QueryExecutor`]; the client itself only shapes requests and responses.

use crate::error::PlatformError;
use crate::session::Session;

mod graphql;

pub mod preview;
pub mod provider;
pub mod secrets;
pub mod testing;
pub mod user;

pub use graphql::{HttpQueryExecutor, QueryExecutor, QueryRequest};
pub use provider::{ClientProvider, LiveClientProvider, UserClient};
pub use secrets::filter_secrets;

/// Client for the Orbital control plane.
///
/// Holds no state beyond its transport; independent calls are safe to run
/// concurrently from multiple tasks.
pub struct PlatformClient {
    executor: Box<dyn QueryExecutor>,
}

impl PlatformClient {
    /// Build a client bound to the ambient authenticated session.
    pub fn from_session(session: &Session) -> Result<Self, PlatformError> {
        let executor = HttpQueryExecutor::from_session(session)?;
        Ok(Self {
            executor: Box::new(executor),
        })
    }

    /// Build a client over an arbitrary executor. Used by tests and by
    /// embedders that bring their own transport.
    pub fn with_executor(executor: Box<dyn QueryExecutor>) -> Self {
        Self { executor }
    }

    pub(crate) fn executor(&self) -> &dyn QueryExecutor {
        self.executor.as_ref()
    }
}
