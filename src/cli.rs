//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to the builder and client.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, DraftCommands};
pub use presentation::{
    format_draft_text, format_files_text, format_include_type, format_narrative_list_text,
    format_narrative_text,
};
pub use route::RunContext;
