//! CLI parse: clap types for Orbital. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Orbital CLI - client for the Orbital application platform
#[derive(Parser)]
#[command(name = "orbital")]
#[command(about = "Command-line client for the Orbital application platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Session file path (overrides the default location)
    #[arg(long)]
    pub session: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Preview environment commands
    Preview {
        #[command(subcommand)]
        command: PreviewCommands,
    },
    /// List deploy secrets available to the current user
    Secrets {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Session context commands
    Context {
        #[command(subcommand)]
        command: ContextCommands,
    },
}

#[derive(Subcommand)]
pub enum PreviewCommands {
    /// Destroy a preview environment
    Destroy {
        /// Environment name; $VAR and ${VAR} references are expanded
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ContextCommands {
    /// Show the current session context
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Resolve the user context from the control plane and update the session
    Refresh,
}
