//! Deploy-secret retrieval and name filtering.

use crate::error::PlatformError;
use crate::platform::{PlatformClient, QueryRequest};
use crate::types::Secret;
use serde::Deserialize;

const SECRETS_QUERY: &str = "\
query deploySecrets {
  getDeploySecrets {
    name
    value
  }
}";

/// Wire shape of a secret entry; shared by the user-context queries.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SecretEntry {
    pub name: String,
    pub value: String,
}

impl From<SecretEntry> for Secret {
    fn from(entry: SecretEntry) -> Self {
        Secret {
            name: entry.name,
            value: entry.value,
        }
    }
}

/// Drop entries whose name contains the `.` separator, preserving order.
///
/// Dotted names are platform-managed entries, not user secrets. This is a
/// data policy, not an error: dropped entries are not reported.
pub fn filter_secrets(raw: Vec<Secret>) -> Vec<Secret> {
    raw.into_iter().filter(|s| !s.name.contains('.')).collect()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SecretsResponse {
    #[serde(rename = "getDeploySecrets")]
    secrets: Vec<SecretEntry>,
}

impl PlatformClient {
    /// Fetch the deploy secrets visible to the current user, filtered by
    /// name.
    pub async fn get_secrets(&self) -> Result<Vec<Secret>, PlatformError> {
        let data = self.executor().run(QueryRequest::new(SECRETS_QUERY)).await?;
        let response: SecretsResponse = serde_json::from_value(data)
            .map_err(|e| PlatformError::UnexpectedResponse(format!("secrets payload: {}", e)))?;

        Ok(filter_secrets(
            response.secrets.into_iter().map(Secret::from).collect(),
        ))
    }
}
