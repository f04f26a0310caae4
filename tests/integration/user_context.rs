//! Integration tests for user context resolution and schema negotiation.

use crate::integration::test_utils::{current_payload, legacy_payload};
use orbital::error::PlatformError;
use orbital::platform::testing::ScriptedExecutor;
use orbital::platform::PlatformClient;
use orbital::types::DEFAULT_GLOBAL_NAMESPACE;

fn client_with(executor: &ScriptedExecutor) -> PlatformClient {
    PlatformClient::with_executor(Box::new(executor.clone()))
}

#[tokio::test]
async fn test_current_schema_resolution() {
    let executor = ScriptedExecutor::new(vec![Ok(current_payload())]);
    let context = client_with(&executor).get_user_context().await.unwrap();

    assert_eq!(context.user.id, "u-1");
    assert_eq!(context.user.global_namespace, "shared");
    assert!(!context.user.analytics);
    assert_eq!(context.credentials.namespace, "rita");
    assert_eq!(executor.calls(), 1);
}

#[tokio::test]
async fn test_secret_filtering_end_to_end() {
    let executor = ScriptedExecutor::new(vec![Ok(current_payload())]);
    let context = client_with(&executor).get_user_context().await.unwrap();

    let names: Vec<&str> = context.secrets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["TOKEN", "API_KEY"]);
    assert_eq!(context.secrets[0].value, "x");
    assert_eq!(context.secrets[1].value, "z");
}

#[tokio::test]
async fn test_legacy_fallback_applies_default_policies() {
    let executor = ScriptedExecutor::new(vec![
        Err(PlatformError::Api(
            "Cannot query field \"globalNamespace\" on type \"me\"".to_string(),
        )),
        Ok(legacy_payload()),
    ]);

    let context = client_with(&executor).get_user_context().await.unwrap();
    assert_eq!(context.user.global_namespace, DEFAULT_GLOBAL_NAMESPACE);
    assert!(context.user.analytics);
    assert_eq!(executor.calls(), 2);
}

#[tokio::test]
async fn test_unrelated_failure_is_not_retried() {
    let executor = ScriptedExecutor::new(vec![Err(PlatformError::Transport(
        "connection refused".to_string(),
    ))]);

    let err = client_with(&executor).get_user_context().await.unwrap_err();
    assert_eq!(
        err,
        PlatformError::Transport("connection refused".to_string())
    );
    assert_eq!(executor.calls(), 1);
}
