//! Integration tests for the preview destroy operation.

use orbital::error::PlatformError;
use orbital::platform::testing::ScriptedExecutor;
use orbital::platform::{preview, PlatformClient};
use serde_json::json;

#[tokio::test]
async fn test_destroy_success() {
    let executor = ScriptedExecutor::new(vec![Ok(json!({"destroyPreview": {"id": "pr-42"}}))]);
    let client = PlatformClient::with_executor(Box::new(executor.clone()));

    preview::execute_destroy(&client, "pr-42").await.unwrap();
    assert_eq!(executor.calls(), 1);
}

#[tokio::test]
async fn test_destroy_failure_is_wrapped_with_prefix() {
    let executor = ScriptedExecutor::new(vec![Err(PlatformError::Api("boom".to_string()))]);
    let client = PlatformClient::with_executor(Box::new(executor.clone()));

    let err = preview::execute_destroy(&client, "env1").await.unwrap_err();
    let text = err.to_string();
    assert!(text.contains("failed to destroy preview environment"));
    assert!(text.contains("boom"));
}

#[tokio::test]
async fn test_destroy_transport_failure_keeps_cause() {
    let executor = ScriptedExecutor::new(vec![Err(PlatformError::Transport(
        "connection refused".to_string(),
    ))]);
    let client = PlatformClient::with_executor(Box::new(executor.clone()));

    let err = preview::execute_destroy(&client, "env1").await.unwrap_err();
    assert!(err.to_string().contains("connection refused"));
}
