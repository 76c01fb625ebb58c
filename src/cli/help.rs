//! CLI command-name contract for logging and routing.

use crate::cli::parse::{Commands, DraftCommands};

/// Command name string for log spans (e.g. "draft.move", "save").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Files { .. } => "files".to_string(),
        Commands::List { .. } => "list".to_string(),
        Commands::Show { .. } => "show".to_string(),
        Commands::Draft { command } => format!("draft.{}", draft_command_name(command)),
        Commands::Save { .. } => "save".to_string(),
        Commands::Resolve { .. } => "resolve".to_string(),
        Commands::Sketch { .. } => "sketch".to_string(),
        Commands::Delete { .. } => "delete".to_string(),
    }
}

pub fn draft_command_name(command: &DraftCommands) -> &'static str {
    match command {
        DraftCommands::Show { .. } => "show",
        DraftCommands::Add { .. } => "add",
        DraftCommands::Move { .. } => "move",
        DraftCommands::Remove { .. } => "remove",
        DraftCommands::Set { .. } => "set",
        DraftCommands::Edit { .. } => "edit",
        DraftCommands::Clear => "clear",
    }
}
