//! CLI presentation: render domain results as text or JSON.

use crate::error::PlatformError;
use crate::session::Session;
use crate::types::{Secret, UserContext};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

fn invalid_format(format: &str) -> PlatformError {
    PlatformError::Config(format!(
        "invalid format: {} (must be 'text' or 'json')",
        format
    ))
}

/// Render the secret list. Values never leave the process; only names are
/// shown.
pub fn format_secrets(secrets: &[Secret], format: &str) -> Result<String, PlatformError> {
    match format {
        "json" => {
            let names: Vec<&str> = secrets.iter().map(|s| s.name.as_str()).collect();
            serde_json::to_string_pretty(&names)
                .map_err(|e| PlatformError::Config(format!("failed to serialize secrets: {}", e)))
        }
        "text" => {
            if secrets.is_empty() {
                return Ok("No deploy secrets".to_string());
            }
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(vec!["NAME"]);
            for secret in secrets {
                table.add_row(vec![secret.name.as_str()]);
            }
            Ok(table.to_string())
        }
        _ => Err(invalid_format(format)),
    }
}

/// Render the current session. The token is redacted in both formats.
pub fn format_session(session: &Session, format: &str) -> Result<String, PlatformError> {
    match format {
        "json" => {
            let value = json!({
                "server": session.server,
                "namespace": session.namespace,
                "global_namespace": session.global_namespace,
                "registry": session.registry,
                "builder": session.builder,
                "telemetry_enabled": session.telemetry_enabled,
            });
            serde_json::to_string_pretty(&value)
                .map_err(|e| PlatformError::Config(format!("failed to serialize session: {}", e)))
        }
        "text" => {
            let server = if session.server.is_empty() {
                "(not set)"
            } else {
                session.server.as_str()
            };
            Ok(format!(
                "Server:            {}\n\
                 Namespace:         {}\n\
                 Global namespace:  {}\n\
                 Registry:          {}\n\
                 Builder:           {}\n\
                 Telemetry:         {}",
                server,
                session.namespace,
                session.global_namespace,
                session.registry,
                session.builder,
                if session.telemetry_enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            ))
        }
        _ => Err(invalid_format(format)),
    }
}

/// One-line summary after a context refresh.
pub fn format_refresh_summary(context: &UserContext) -> String {
    format!(
        "Context refreshed for '{}' (namespace '{}', {} secrets)",
        context.user.name,
        context.user.namespace,
        context.secrets.len()
    )
}
