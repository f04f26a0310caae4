//! Configuration loading for the CLI.
//!
//! An optional TOML file under the XDG config directory. Logging-related
//! environment overrides are applied by the logging layer itself.

use crate::error::PlatformError;
use crate::logging::LoggingConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Telemetry configuration
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Master switch; ANDed with the per-user flag from the session.
    pub enabled: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Facade over the `config` crate: default path resolution plus explicit
/// file loading.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the default XDG location; defaults when no file exists.
    pub fn load() -> Result<OrbitalConfig, PlatformError> {
        let path = default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(OrbitalConfig::default())
        }
    }

    pub fn load_from_file(path: &Path) -> Result<OrbitalConfig, PlatformError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .build()
            .map_err(|e| {
                PlatformError::Config(format!(
                    "failed to load config file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        settings
            .try_deserialize()
            .map_err(|e| PlatformError::Config(format!("invalid configuration: {}", e)))
    }
}

/// Default config path: `<XDG config>/orbital/config.toml`.
pub fn default_config_path() -> Result<PathBuf, PlatformError> {
    let dirs = ProjectDirs::from("", "", "orbital").ok_or_else(|| {
        PlatformError::Config("could not determine a home directory for configuration".into())
    })?;
    Ok(dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OrbitalConfig::default();
        assert!(config.telemetry.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[logging]\nlevel = \"debug\"\n\n[telemetry]\nenabled = false\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(!config.telemetry.enabled);
    }

    #[test]
    fn test_load_from_file_partial_sections_use_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[logging]\nformat = \"json\"\n").unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert!(config.telemetry.enabled);
    }
}
