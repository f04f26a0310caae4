//! Error types for the Orbital platform client.

use thiserror::Error;

/// Errors surfaced by the platform client and the CLI layer.
///
/// Variants carry plain strings so the enum stays `Clone` + `PartialEq`;
/// the fake client in `platform::testing` re-returns its configured error
/// on every call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// Error reported by the control plane in the GraphQL `errors` array.
    /// The message is kept verbatim; schema negotiation inspects it.
    #[error("{0}")]
    Api(String),

    /// Transport-level failure (connect, timeout, malformed HTTP exchange).
    #[error("transport error: {0}")]
    Transport(String),

    /// The control plane rejected the session token.
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    /// The server answered but the payload did not match any known shape.
    #[error("unexpected server response: {0}")]
    UnexpectedResponse(String),

    /// Configuration or session-store error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Destroy wrapper: underlying cause text is preserved after the prefix.
    #[error("failed to destroy preview environment: {0}")]
    DestroyPreview(String),

    /// The current session does not point at an Orbital cluster.
    #[error("current context is not an Orbital cluster. Run 'orbital context use <url>' first")]
    NotPlatformCluster,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destroy_preview_keeps_cause_text() {
        let err = PlatformError::DestroyPreview("boom".to_string());
        let text = err.to_string();
        assert!(text.contains("failed to destroy preview environment"));
        assert!(text.contains("boom"));
    }

    #[test]
    fn test_api_error_message_is_verbatim() {
        let err =
            PlatformError::Api("Cannot query field \"globalNamespace\" on type \"me\"".to_string());
        assert_eq!(
            err.to_string(),
            "Cannot query field \"globalNamespace\" on type \"me\""
        );
    }
}
