//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{format_destroy_success, map_error};
pub use parse::{Cli, Commands, ContextCommands, PreviewCommands};
pub use route::RunContext;
