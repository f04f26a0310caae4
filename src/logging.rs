//! Structured logging via the `tracing` crate.
//!
//! Configurable level, format, and destination. Command output goes to
//! stdout, so logs default to stderr.

use crate::error::PlatformError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text
    pub format: String,

    /// Output destination: stdout, stderr, file
    pub output: String,

    /// Log file path (if output is "file")
    pub file: PathBuf,

    /// Enable colored output (text format, terminal destinations only)
    pub color: bool,

    /// Module-specific log levels
    pub modules: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            output: "stderr".to_string(),
            file: PathBuf::from("orbital.log"),
            color: true,
            modules: HashMap::new(),
        }
    }
}

/// Initialize the logging system.
///
/// Priority order (highest to lowest): environment variables
/// (`ORBITAL_LOG`, `ORBITAL_LOG_FORMAT`, `ORBITAL_LOG_OUTPUT`,
/// `ORBITAL_LOG_MODULES`), configuration, defaults.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), PlatformError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true) && output != Output::File;

    let writer = match output {
        Output::Stdout => BoxMakeWriter::new(std::io::stdout),
        Output::Stderr => BoxMakeWriter::new(std::io::stderr),
        Output::File => {
            let log_file = config
                .map(|c| c.file.clone())
                .unwrap_or_else(|| LoggingConfig::default().file);
            if let Some(parent) = log_file.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        PlatformError::Config(format!("failed to create log directory: {}", e))
                    })?;
                }
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
                .map_err(|e| {
                    PlatformError::Config(format!(
                        "failed to open log file {}: {}",
                        log_file.display(),
                        e
                    ))
                })?;
            BoxMakeWriter::new(std::sync::Arc::new(file))
        }
    };

    let base_subscriber = Registry::default().with(filter);

    if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .init();
    }

    Ok(())
}

/// Build the env filter from `ORBITAL_LOG`, or from config plus
/// `ORBITAL_LOG_MODULES` directives.
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, PlatformError> {
    if let Ok(filter) = EnvFilter::try_from_env("ORBITAL_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(directive.parse().map_err(|e| {
                PlatformError::Config(format!("invalid log directive: {}", e))
            })?);
        }
    }

    if let Ok(modules_str) = std::env::var("ORBITAL_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            let parts: Vec<&str> = module_spec.split('=').collect();
            if parts.len() == 2 {
                let directive = format!("{}={}", parts[0].trim(), parts[1].trim());
                filter = filter.add_directive(directive.parse().map_err(|e| {
                    PlatformError::Config(format!("invalid log directive from env: {}", e))
                })?);
            }
        }
    }

    Ok(filter)
}

fn determine_format(config: Option<&LoggingConfig>) -> Result<String, PlatformError> {
    if let Ok(format) = std::env::var("ORBITAL_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    if format != "json" && format != "text" {
        return Err(PlatformError::Config(format!(
            "invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Stdout,
    Stderr,
    File,
}

fn determine_output(config: Option<&LoggingConfig>) -> Result<Output, PlatformError> {
    if let Ok(output) = std::env::var("ORBITAL_LOG_OUTPUT") {
        return parse_output(&output);
    }

    let output = config.map(|c| c.output.as_str()).unwrap_or("stderr");
    parse_output(output)
}

fn parse_output(output: &str) -> Result<Output, PlatformError> {
    match output {
        "stdout" => Ok(Output::Stdout),
        "stderr" => Ok(Output::Stderr),
        "file" => Ok(Output::File),
        _ => Err(PlatformError::Config(format!(
            "invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        ))),
    }
}
