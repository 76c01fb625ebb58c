//! CLI parse: clap types for Weaver. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// Weaver CLI - Assemble ordered narrative contexts
#[derive(Parser)]
#[command(name = "weaver")]
#[command(about = "Assemble ordered file contexts into reusable narratives")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (holds config/ and the draft)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

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

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List files the backend offers as context
    Files {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List saved narratives
    List {
        /// Show templates instead of normal narratives
        #[arg(long)]
        templates: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one saved narrative
    Show {
        id: Uuid,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Edit the narrative draft
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },
    /// Save the draft (updates the narrative being edited, if any)
    Save {
        /// Always create a new narrative
        #[arg(long)]
        as_new: bool,
    },
    /// Resolve a narrative into text
    Resolve {
        id: Uuid,
        /// Write narrative-<id>.txt into this directory instead of printing
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the /sketch command for a narrative
    Sketch { id: Uuid },
    /// Delete a saved narrative
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum DraftCommands {
    /// Show the draft and its context entries
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Append files to the context list (files already present are skipped)
    Add {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Move the entry with storage INDEX to drop zone POSITION (0 = first, len = last)
    Move { index: usize, position: usize },
    /// Remove the entry with storage INDEX
    Remove { index: usize },
    /// Set narrative details
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Mark the narrative as a reusable template
        #[arg(long)]
        template: Option<bool>,
    },
    /// Load a saved narrative into the draft for editing
    Edit { id: Uuid },
    /// Discard the draft
    Clear,
}
