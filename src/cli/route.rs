//! CLI route: single route table and run context. Dispatches to domain
//! services and presentation.

use crate::cli::parse::{Commands, ContextCommands, PreviewCommands};
use crate::cli::{output, presentation};
use crate::config::OrbitalConfig;
use crate::error::PlatformError;
use crate::platform::{preview, ClientProvider, LiveClientProvider, PlatformClient};
use crate::session::{default_session_path, Session};
use crate::telemetry::{default_spool_path, Tracker};
use std::path::PathBuf;

/// Runtime context for CLI execution: the stored session and the telemetry
/// tracker. Built once per invocation.
pub struct RunContext {
    session: Session,
    session_path: PathBuf,
    tracker: Tracker,
}

impl RunContext {
    /// Create a run context from an optional session-path override and the
    /// loaded configuration.
    pub fn new(
        session_path: Option<PathBuf>,
        config: &OrbitalConfig,
    ) -> Result<Self, PlatformError> {
        let session_path = match session_path {
            Some(path) => path,
            None => default_session_path()?,
        };
        let session = Session::load_from(&session_path)?;

        let telemetry_enabled = config.telemetry.enabled && session.telemetry_enabled;
        let tracker = Tracker::new(telemetry_enabled, default_spool_path()?);

        Ok(Self {
            session,
            session_path,
            tracker,
        })
    }

    /// Execute one command and return its stdout payload.
    pub async fn execute(&mut self, command: &Commands) -> Result<String, PlatformError> {
        match command {
            Commands::Preview {
                command: PreviewCommands::Destroy { name },
            } => self.destroy_preview(name).await,
            Commands::Secrets { format } => self.list_secrets(format).await,
            Commands::Context { command } => match command {
                ContextCommands::Show { format } => {
                    presentation::format_session(&self.session, format)
                }
                ContextCommands::Refresh => self.refresh_context().await,
            },
        }
    }

    async fn destroy_preview(&self, name: &str) -> Result<String, PlatformError> {
        let name = expand_name(name);
        if !self.session.is_platform_cluster() {
            return Err(PlatformError::NotPlatformCluster);
        }

        let result = preview::destroy_by_name(&self.session, &name).await;
        self.tracker.track_preview_destroy(result.is_ok());
        result?;

        Ok(output::format_destroy_success(&name))
    }

    async fn list_secrets(&self, format: &str) -> Result<String, PlatformError> {
        if !self.session.is_platform_cluster() {
            return Err(PlatformError::NotPlatformCluster);
        }

        let client = PlatformClient::from_session(&self.session)?;
        let secrets = client.get_secrets().await?;
        presentation::format_secrets(&secrets, format)
    }

    async fn refresh_context(&mut self) -> Result<String, PlatformError> {
        if !self.session.is_platform_cluster() {
            return Err(PlatformError::NotPlatformCluster);
        }

        let provider = LiveClientProvider::new(self.session.clone());
        let result = self.resolve_and_store(&provider).await;
        self.tracker.track_context_refresh(result.is_ok());
        result
    }

    /// Resolve through the provider seam and fold the result into the
    /// stored session.
    async fn resolve_and_store(
        &mut self,
        provider: &dyn ClientProvider,
    ) -> Result<String, PlatformError> {
        let client = provider.new_user_client()?;
        let context = client.get_user_context().await?;

        self.session.update_from_context(&context);
        self.session.save_to(&self.session_path)?;

        Ok(presentation::format_refresh_summary(&context))
    }
}

/// Expand `$VAR` and `${VAR}` references against the process environment.
/// Unset variables expand to the empty string; a lone `$` is kept.
fn expand_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        let braced = chars.peek() == Some(&'{');
        if braced {
            chars.next();
        }

        let mut var = String::new();
        while let Some(&next) = chars.peek() {
            let stop = if braced {
                next == '}'
            } else {
                !(next.is_ascii_alphanumeric() || next == '_')
            };
            if stop {
                break;
            }
            var.push(next);
            chars.next();
        }
        if braced {
            chars.next();
        }

        if var.is_empty() && !braced {
            out.push('$');
            continue;
        }
        if let Ok(value) = std::env::var(&var) {
            out.push_str(&value);
        }
    }

    out
}
