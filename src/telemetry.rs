//! Usage telemetry: anonymous command-outcome events.
//!
//! Events are appended to a local JSON-lines spool under the XDG data
//! directory; shipping the spool is the platform collector's job, not
//! this client's. A disabled tracker is a no-op, and spool failures never
//! surface to the caller.

use crate::error::PlatformError;
use chrono::{SecondsFormat, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub ts: String,
    pub event: String,
    pub success: bool,
}

impl TelemetryEvent {
    pub fn new(event: impl Into<String>, success: bool) -> Self {
        Self {
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            event: event.into(),
            success,
        }
    }
}

/// Appends events to the local spool file.
pub struct Tracker {
    enabled: bool,
    path: PathBuf,
}

impl Tracker {
    pub fn new(enabled: bool, path: PathBuf) -> Self {
        Self { enabled, path }
    }

    /// Tracker writing to the default spool location.
    pub fn from_defaults(enabled: bool) -> Result<Self, PlatformError> {
        Ok(Self::new(enabled, default_spool_path()?))
    }

    /// Record the outcome of a preview-environment destroy.
    pub fn track_preview_destroy(&self, success: bool) {
        self.emit(TelemetryEvent::new("preview_destroy", success));
    }

    /// Record the outcome of a context refresh.
    pub fn track_context_refresh(&self, success: bool) {
        self.emit(TelemetryEvent::new("context_refresh", success));
    }

    fn emit(&self, event: TelemetryEvent) {
        if !self.enabled {
            return;
        }
        if let Err(e) = self.append(&event) {
            tracing::debug!("failed to record telemetry event: {}", e);
        }
    }

    fn append(&self, event: &TelemetryEvent) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let line = serde_json::to_string(event)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }
}

/// Default spool path: `<XDG data>/orbital/telemetry.jsonl`.
pub fn default_spool_path() -> Result<PathBuf, PlatformError> {
    let dirs = ProjectDirs::from("", "", "orbital").ok_or_else(|| {
        PlatformError::Config("could not determine a home directory for telemetry".into())
    })?;
    Ok(dirs.data_dir().join("telemetry.jsonl"))
}
