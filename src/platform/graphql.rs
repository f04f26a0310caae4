//! Minimal GraphQL transport over HTTP.
//!
//! The client never touches reqwest directly; it depends on
//! [`QueryExecutor`] and this module supplies the live implementation.

use crate::error::PlatformError;
use crate::session::Session;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// One named query or mutation plus its variables.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub query: String,
    pub variables: Map<String, Value>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
        }
    }

    pub fn with_variable(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.variables.insert(name.to_string(), value.into());
        self
    }
}

/// Executes one query against the control plane and returns the response
/// `data` payload. Cancellation is cooperative: dropping the returned future
/// aborts the request, and the transport timeout bounds every call.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn run(&self, request: QueryRequest) -> Result<Value, PlatformError>;
}

/// Live executor: POSTs the standard `{query, variables}` envelope to the
/// session's GraphQL endpoint with a bearer token.
pub struct HttpQueryExecutor {
    client: Client,
    endpoint: String,
    token: String,
}

impl HttpQueryExecutor {
    pub fn from_session(session: &Session) -> Result<Self, PlatformError> {
        let client = Client::builder()
            .connect_timeout(HTTP_CONNECT_TIMEOUT)
            .timeout(HTTP_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                PlatformError::Transport(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: session.graphql_endpoint(),
            token: session.token.clone(),
        })
    }
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: &'a Map<String, Value>,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

#[async_trait]
impl QueryExecutor for HttpQueryExecutor {
    async fn run(&self, request: QueryRequest) -> Result<Value, PlatformError> {
        let body = GraphqlRequest {
            query: &request.query,
            variables: &request.variables,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&body)
            .send()
            .await
            .map_err(map_http_error)?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(PlatformError::Unauthorized(text));
        }
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(PlatformError::Transport(format!(
                "request failed with status {}: {}",
                status, text
            )));
        }

        let envelope: GraphqlResponse = response.json().await.map_err(|e| {
            PlatformError::UnexpectedResponse(format!("failed to parse response: {}", e))
        })?;

        // Server-side errors carry the schema diagnostics the negotiation
        // layer inspects; the message text must stay verbatim.
        if !envelope.errors.is_empty() {
            let message = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(PlatformError::Api(message));
        }

        envelope.data.ok_or_else(|| {
            PlatformError::UnexpectedResponse(
                "response carried neither data nor errors".to_string(),
            )
        })
    }
}

fn map_http_error(error: reqwest::Error) -> PlatformError {
    if error.is_timeout() {
        PlatformError::Transport(format!("request timeout: {}", error))
    } else if error.is_connect() {
        PlatformError::Transport(format!("connection error: {}", error))
    } else {
        PlatformError::Transport(format!("HTTP error: {}", error))
    }
}
