//! Client-provider seam.
//!
//! Consumers of context resolution depend on these traits, never on the
//! live client's construction details, so the test doubles in
//! [`crate::platform::testing`] substitute without conditional logic.

use crate::error::PlatformError;
use crate::platform::PlatformClient;
use crate::session::Session;
use crate::types::UserContext;
use async_trait::async_trait;

/// Capability: resolve a user context from the control plane.
#[async_trait]
pub trait UserClient: Send + Sync {
    async fn get_user_context(&self) -> Result<UserContext, PlatformError>;
}

/// Capability: build a [`UserClient`]. Construction itself may fail (e.g.
/// transport setup), and that failure propagates to the caller.
pub trait ClientProvider: Send + Sync {
    fn new_user_client(&self) -> Result<Box<dyn UserClient>, PlatformError>;
}

#[async_trait]
impl UserClient for PlatformClient {
    async fn get_user_context(&self) -> Result<UserContext, PlatformError> {
        PlatformClient::get_user_context(self).await
    }
}

/// Network-backed provider bound to the ambient authenticated session.
pub struct LiveClientProvider {
    session: Session,
}

impl LiveClientProvider {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl ClientProvider for LiveClientProvider {
    fn new_user_client(&self) -> Result<Box<dyn UserClient>, PlatformError> {
        let client = PlatformClient::from_session(&self.session)?;
        Ok(Box::new(client))
    }
}
