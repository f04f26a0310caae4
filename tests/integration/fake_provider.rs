//! Integration tests for the client-provider seam.
//!
//! A consumer written against the `ClientProvider` trait works with the
//! fake without any conditional logic; that substitution is the contract
//! these tests pin down.

use crate::integration::test_utils::sample_context;
use orbital::error::PlatformError;
use orbital::platform::testing::FakeClientProvider;
use orbital::platform::ClientProvider;

/// A consumer that only knows the capability trait.
async fn resolve_namespace(provider: &dyn ClientProvider) -> Result<String, PlatformError> {
    let client = provider.new_user_client()?;
    let context = client.get_user_context().await?;
    Ok(context.user.namespace)
}

#[tokio::test]
async fn test_fake_provider_substitutes_for_live() {
    let provider = FakeClientProvider::new(sample_context(), None);
    let namespace = resolve_namespace(&provider).await.unwrap();
    assert_eq!(namespace, "rita");
}

#[tokio::test]
async fn test_fake_provider_returns_same_pair_on_every_call() {
    let provider = FakeClientProvider::new(sample_context(), None);
    let client = provider.new_user_client().unwrap();

    for _ in 0..5 {
        let context = client.get_user_context().await.unwrap();
        assert_eq!(context, sample_context());
    }
}

#[tokio::test]
async fn test_fake_provider_fixed_error_propagates() {
    let provider = FakeClientProvider::new(
        sample_context(),
        Some(PlatformError::Unauthorized("token expired".to_string())),
    );

    let err = resolve_namespace(&provider).await.unwrap_err();
    assert_eq!(
        err,
        PlatformError::Unauthorized("token expired".to_string())
    );
}
