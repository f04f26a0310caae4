//! User context resolution with backward-compatible schema negotiation.
//!
//! The client has no way to ask a control plane for its schema version, so
//! it assumes the newest shape and downgrades reactively: a field-rejection
//! diagnostic from an older server triggers exactly one retry with the
//! legacy query shape. Any other failure, including a failure of the retry
//! itself, propagates unchanged.

use crate::error::PlatformError;
use crate::platform::secrets::{filter_secrets, SecretEntry};
use crate::platform::{PlatformClient, QueryRequest};
use crate::types::{Credential, Secret, User, UserContext, DEFAULT_GLOBAL_NAMESPACE};
use serde::Deserialize;

const USER_CONTEXT_QUERY: &str = "\
query userContext($cred: String!) {
  user {
    id
    name
    namespace
    email
    externalID
    token
    new
    registry
    builder
    certificate
    globalNamespace
    telemetryEnabled
  }
  getDeploySecrets {
    name
    value
  }
  credentials(space: $cred) {
    server
    certificate
    token
    namespace
  }
}";

const LEGACY_USER_CONTEXT_QUERY: &str = "\
query userContext($cred: String!) {
  user {
    id
    name
    namespace
    email
    externalID
    token
    new
    registry
    builder
    certificate
  }
  getDeploySecrets {
    name
    value
  }
  credentials(space: $cred) {
    server
    certificate
    token
    namespace
  }
}";

const GLOBAL_NAMESPACE_REJECTION: &str = "Cannot query field \"globalNamespace\" on type \"me\"";
const TELEMETRY_REJECTION: &str = "Cannot query field \"telemetryEnabled\" on type \"me\"";

/// True when `err` is an older control plane rejecting fields introduced by
/// the current schema. These two diagnostics are the only recoverable
/// signatures; matching is case-sensitive substring containment.
fn is_legacy_schema_rejection(err: &PlatformError) -> bool {
    let message = err.to_string();
    message.contains(GLOBAL_NAMESPACE_REJECTION) || message.contains(TELEMETRY_REJECTION)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CurrentUserEntry {
    id: String,
    name: String,
    namespace: String,
    email: String,
    #[serde(rename = "externalID")]
    external_id: String,
    token: String,
    new: bool,
    registry: String,
    builder: String,
    certificate: String,
    #[serde(rename = "globalNamespace")]
    global_namespace: String,
    #[serde(rename = "telemetryEnabled")]
    telemetry_enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LegacyUserEntry {
    id: String,
    name: String,
    namespace: String,
    email: String,
    #[serde(rename = "externalID")]
    external_id: String,
    token: String,
    new: bool,
    registry: String,
    builder: String,
    certificate: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CredentialEntry {
    server: String,
    certificate: String,
    token: String,
    namespace: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CurrentResponse {
    user: CurrentUserEntry,
    #[serde(rename = "getDeploySecrets")]
    secrets: Vec<SecretEntry>,
    credentials: CredentialEntry,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LegacyResponse {
    user: LegacyUserEntry,
    #[serde(rename = "getDeploySecrets")]
    secrets: Vec<SecretEntry>,
    credentials: CredentialEntry,
}

/// An empty server value still yields a usable namespace.
fn global_namespace_or_default(value: String) -> String {
    if value.is_empty() {
        DEFAULT_GLOBAL_NAMESPACE.to_string()
    } else {
        value
    }
}

fn credential(entry: CredentialEntry) -> Credential {
    Credential {
        server: entry.server,
        certificate: entry.certificate,
        token: entry.token,
        namespace: entry.namespace,
    }
}

fn secrets(entries: Vec<SecretEntry>) -> Vec<Secret> {
    filter_secrets(entries.into_iter().map(Secret::from).collect())
}

fn context_from_current(response: CurrentResponse) -> UserContext {
    UserContext {
        user: User {
            id: response.user.id,
            name: response.user.name,
            namespace: response.user.namespace,
            email: response.user.email,
            external_id: response.user.external_id,
            token: response.user.token,
            new: response.user.new,
            registry: response.user.registry,
            builder: response.user.builder,
            certificate: response.user.certificate,
            global_namespace: global_namespace_or_default(response.user.global_namespace),
            analytics: response.user.telemetry_enabled,
        },
        secrets: secrets(response.secrets),
        credentials: credential(response.credentials),
    }
}

fn context_from_legacy(response: LegacyResponse) -> UserContext {
    UserContext {
        user: User {
            id: response.user.id,
            name: response.user.name,
            namespace: response.user.namespace,
            email: response.user.email,
            external_id: response.user.external_id,
            token: response.user.token,
            new: response.user.new,
            registry: response.user.registry,
            builder: response.user.builder,
            certificate: response.user.certificate,
            // Servers this old predate configurable global namespaces and
            // telemetry opt-out.
            global_namespace: DEFAULT_GLOBAL_NAMESPACE.to_string(),
            analytics: true,
        },
        secrets: secrets(response.secrets),
        credentials: credential(response.credentials),
    }
}

impl PlatformClient {
    /// Resolve the user context from the control plane.
    ///
    /// Issues the newest query shape first. When the server rejects the
    /// schema-version fields, retries once with the legacy shape and fills
    /// the gaps with fallback defaults.
    pub async fn get_user_context(&self) -> Result<UserContext, PlatformError> {
        let request = QueryRequest::new(USER_CONTEXT_QUERY).with_variable("cred", "");
        match self.executor().run(request).await {
            Ok(data) => {
                let response: CurrentResponse = serde_json::from_value(data).map_err(|e| {
                    PlatformError::UnexpectedResponse(format!("user context payload: {}", e))
                })?;
                Ok(context_from_current(response))
            }
            Err(err) if is_legacy_schema_rejection(&err) => {
                tracing::debug!(
                    "control plane predates the current schema, retrying with legacy user query"
                );
                self.legacy_user_context().await
            }
            Err(err) => Err(err),
        }
    }

    async fn legacy_user_context(&self) -> Result<UserContext, PlatformError> {
        let request = QueryRequest::new(LEGACY_USER_CONTEXT_QUERY).with_variable("cred", "");
        let data = self.executor().run(request).await?;
        let response: LegacyResponse = serde_json::from_value(data).map_err(|e| {
            PlatformError::UnexpectedResponse(format!("legacy user context payload: {}", e))
        })?;
        Ok(context_from_legacy(response))
    }
}
