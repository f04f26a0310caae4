//! Orbital CLI Binary
//!
//! Command-line interface for the Orbital application platform.

use clap::Parser;
use orbital::cli::{map_error, Cli, RunContext};
use orbital::config::{ConfigLoader, OrbitalConfig};
use orbital::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = load_config(&cli);
    let logging_config = build_logging_config(&cli, &config);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Orbital CLI starting");

    let mut context = match RunContext::new(cli.session.clone(), &config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing session: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command).await {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> OrbitalConfig {
    let loaded = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("Warning: {}", e);
        OrbitalConfig::default()
    })
}

/// Build logging configuration from CLI args and the config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &OrbitalConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }

    logging
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_logging_config_default() {
        let cli = Cli::try_parse_from(["orbital", "secrets"]).unwrap();
        let config = build_logging_config(&cli, &OrbitalConfig::default());
        assert_eq!(config.level, "info");
        assert_eq!(config.output, "stderr");
    }

    #[test]
    fn test_build_logging_config_verbose() {
        let cli = Cli::try_parse_from(["orbital", "--verbose", "secrets"]).unwrap();
        let config = build_logging_config(&cli, &OrbitalConfig::default());
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn test_build_logging_config_explicit_level_wins() {
        let cli =
            Cli::try_parse_from(["orbital", "--verbose", "--log-level", "trace", "secrets"])
                .unwrap();
        let config = build_logging_config(&cli, &OrbitalConfig::default());
        assert_eq!(config.level, "trace");
    }
}
