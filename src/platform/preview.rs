//! Preview environment lifecycle operations.

use crate::error::PlatformError;
use crate::platform::{PlatformClient, QueryRequest};
use crate::session::Session;

const DESTROY_PREVIEW_MUTATION: &str = "\
mutation destroyPreview($id: String!) {
  destroyPreview(id: $id) {
    id
  }
}";

impl PlatformClient {
    /// Issue the destroy mutation for the named preview environment.
    ///
    /// Remote errors surface as-is, including not-found responses for an
    /// environment that was already destroyed.
    pub async fn destroy_preview(&self, name: &str) -> Result<(), PlatformError> {
        let request = QueryRequest::new(DESTROY_PREVIEW_MUTATION).with_variable("id", name);
        self.executor().run(request).await.map(|_| ())
    }
}

/// Destroy `name` through `client`, wrapping any failure with the stable
/// user-facing prefix. The underlying cause text is preserved.
pub async fn execute_destroy(client: &PlatformClient, name: &str) -> Result<(), PlatformError> {
    client
        .destroy_preview(name)
        .await
        .map_err(|err| PlatformError::DestroyPreview(err.to_string()))?;

    tracing::info!(preview = name, "preview environment destroyed");
    Ok(())
}

/// Destroy `name` against the ambient session. Client construction failures
/// propagate unwrapped; only the destroy call itself gets the prefix.
pub async fn destroy_by_name(session: &Session, name: &str) -> Result<(), PlatformError> {
    let client = PlatformClient::from_session(session)?;
    execute_destroy(&client, name).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::ScriptedExecutor;
    use serde_json::json;

    #[tokio::test]
    async fn test_execute_destroy_wraps_remote_error() {
        let executor =
            ScriptedExecutor::new(vec![Err(PlatformError::Api("boom".to_string()))]);
        let client = PlatformClient::with_executor(Box::new(executor.clone()));

        let err = execute_destroy(&client, "env1").await.unwrap_err();
        let text = err.to_string();
        assert!(text.contains("failed to destroy preview environment"));
        assert!(text.contains("boom"));
        assert_eq!(executor.calls(), 1);
    }

    #[tokio::test]
    async fn test_execute_destroy_success_is_silent() {
        let executor =
            ScriptedExecutor::new(vec![Ok(json!({"destroyPreview": {"id": "env1"}}))]);
        let client = PlatformClient::with_executor(Box::new(executor.clone()));

        execute_destroy(&client, "env1").await.unwrap();
        assert_eq!(executor.calls(), 1);
    }

    #[tokio::test]
    async fn test_repeat_destroy_surfaces_not_found() {
        let executor = ScriptedExecutor::new(vec![Err(PlatformError::Api(
            "preview environment 'env1' not found".to_string(),
        ))]);
        let client = PlatformClient::with_executor(Box::new(executor.clone()));

        let err = execute_destroy(&client, "env1").await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
