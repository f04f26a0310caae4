//! CLI output: error mapping and success lines for the stable CLI surface.

use crate::error::PlatformError;
use owo_colors::OwoColorize;

/// Map domain/service errors to a string for CLI output.
/// Keeps route handlers thin; extend with stable categories if needed.
pub fn map_error(e: &PlatformError) -> String {
    e.to_string()
}

/// Success line for a destroyed preview environment.
pub fn format_destroy_success(name: &str) -> String {
    format!("{} Preview environment '{}' destroyed", "✓".green(), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destroy_success_names_the_environment() {
        let line = format_destroy_success("pr-42");
        assert!(line.contains("pr-42"));
        assert!(line.contains("destroyed"));
    }
}
