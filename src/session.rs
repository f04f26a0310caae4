//! Ambient authenticated session against an Orbital control plane.
//!
//! The session carries the stored server endpoint, token, and the endpoints
//! resolved from the last user context. It persists as TOML under the XDG
//! config directory. Token acquisition happens out of band; this store only
//! carries the material.

use crate::error::PlatformError;
use crate::types::{UserContext, DEFAULT_GLOBAL_NAMESPACE};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Control-plane URL, e.g. `https://cloud.orbital.example`. A non-URL
    /// value means the session points at a plain cluster context.
    pub server: String,
    pub token: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    pub registry: String,
    pub builder: String,
    pub global_namespace: String,
    pub telemetry_enabled: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            server: String::new(),
            token: String::new(),
            namespace: String::new(),
            certificate: None,
            registry: String::new(),
            builder: String::new(),
            global_namespace: DEFAULT_GLOBAL_NAMESPACE.to_string(),
            telemetry_enabled: true,
        }
    }
}

impl Session {
    /// Load the session from the default XDG location. A missing file
    /// yields the default (unauthenticated) session.
    pub fn load() -> Result<Self, PlatformError> {
        Self::load_from(&default_session_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, PlatformError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            PlatformError::Config(format!(
                "failed to read session file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            PlatformError::Config(format!(
                "failed to parse session file {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn save(&self) -> Result<(), PlatformError> {
        self.save_to(&default_session_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), PlatformError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlatformError::Config(format!(
                    "failed to create session directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| PlatformError::Config(format!("failed to serialize session: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            PlatformError::Config(format!(
                "failed to write session file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// True when the session points at an Orbital control plane rather
    /// than a plain cluster context. Destructive remote commands are gated
    /// on this.
    pub fn is_platform_cluster(&self) -> bool {
        self.server.starts_with("https://") || self.server.starts_with("http://")
    }

    /// GraphQL endpoint derived from the server URL.
    pub fn graphql_endpoint(&self) -> String {
        format!("{}/graphql", self.server.trim_end_matches('/'))
    }

    /// Fold a freshly resolved user context into the stored session.
    /// The server URL is not touched; it identifies the session.
    pub fn update_from_context(&mut self, context: &UserContext) {
        self.namespace = context.user.namespace.clone();
        self.registry = context.user.registry.clone();
        self.builder = context.user.builder.clone();
        self.global_namespace = context.user.global_namespace.clone();
        self.telemetry_enabled = context.user.analytics;
        if !context.user.token.is_empty() {
            self.token = context.user.token.clone();
        }
        self.certificate = if context.user.certificate.is_empty() {
            None
        } else {
            Some(context.user.certificate.clone())
        };
    }
}

/// Default session path: `<XDG config>/orbital/session.toml`.
pub fn default_session_path() -> Result<PathBuf, PlatformError> {
    let dirs = ProjectDirs::from("", "", "orbital").ok_or_else(|| {
        PlatformError::Config("could not determine a home directory for the session store".into())
    })?;
    Ok(dirs.config_dir().join("session.toml"))
}
