//! Core data model for the Orbital platform client.
//!
//! `UserContext` is the unit of exchange with the control plane: built once
//! per resolution call, never mutated afterwards, consumed by the session
//! store or CLI presentation.

use serde::{Deserialize, Serialize};

/// Namespace used for platform-wide shared resources when the server does
/// not report one (legacy control planes).
pub const DEFAULT_GLOBAL_NAMESPACE: &str = "orbital";

/// Identity attributes of the authenticated user as reported by the
/// control plane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub namespace: String,
    pub email: String,
    /// Identity-provider reference (e.g. the upstream SSO subject).
    pub external_id: String,
    pub token: String,
    /// True when the account was provisioned by this resolution call.
    pub new: bool,
    /// Container registry endpoint assigned to the user.
    pub registry: String,
    /// Build-execution endpoint assigned to the user.
    pub builder: String,
    /// Opaque certificate material for cluster access.
    pub certificate: String,
    /// Never empty: server value, or [`DEFAULT_GLOBAL_NAMESPACE`].
    pub global_namespace: String,
    /// Whether usage telemetry is enabled for this user.
    pub analytics: bool,
}

/// A named deploy secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    pub name: String,
    pub value: String,
}

/// Connection descriptor for the user's namespace. Carries its own
/// certificate/token values, sourced independently from [`User`]'s fields;
/// callers must not assume they are identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub server: String,
    pub certificate: String,
    pub token: String,
    pub namespace: String,
}

/// Resolved user/session context. Immutable transfer object; every secret
/// name it holds is free of the `.` separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub user: User,
    pub secrets: Vec<Secret>,
    pub credentials: Credential,
}
