//! CLI route: single route table and run context. Dispatches to the narrative
//! builder, the draft store, the backend client, and presentation.

use crate::cli::parse::{Commands, DraftCommands};
use crate::cli::presentation::{
    format_draft_text, format_files_text, format_narrative_list_text, format_narrative_text,
    to_pretty_json,
};
use crate::cli::command_name;
use crate::client::{HttpNarrativeClient, NarrativeApi};
use crate::config::{ConfigLoader, WeaverConfig};
use crate::error::ApiError;
use crate::narrative::{
    filter_by_tab, write_export, DraftStore, DropOutcome, DropPayload, NarrativeBuilder,
    NarrativeTab, SaveMode,
};
use crate::types::{DisplayPosition, NarrativeId, StorageIndex};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Runtime;
use tracing::{info, info_span, warn};

/// Runtime context for CLI execution: workspace, configuration, backend client,
/// and the draft store.
pub struct RunContext {
    workspace_root: PathBuf,
    config: WeaverConfig,
    client: Arc<dyn NarrativeApi>,
    drafts: DraftStore,
    runtime: Runtime,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        let client = HttpNarrativeClient::from_config(&config.api)?;
        Self::with_client(workspace_root, config, Arc::new(client))
    }

    /// Create run context around an explicit backend implementation.
    pub fn with_client(
        workspace_root: PathBuf,
        config: WeaverConfig,
        client: Arc<dyn NarrativeApi>,
    ) -> Result<Self, ApiError> {
        let drafts = DraftStore::new(config.draft.resolve_path(&workspace_root));
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            workspace_root,
            config,
            client,
            drafts,
            runtime,
        })
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn config(&self) -> &WeaverConfig {
        &self.config
    }

    pub fn draft_path(&self) -> &Path {
        self.drafts.path()
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        let span = info_span!("command", name = %name);
        let _entered = span.enter();

        let started = Instant::now();
        let result = self.execute_inner(command);
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(duration_ms, "Command completed"),
            Err(e) => warn!(duration_ms, error = %e, "Command failed"),
        }
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Files { format } => {
                let files = self.block_on(self.client.fetch_files())?;
                if format == "json" {
                    to_pretty_json(&files)
                } else {
                    Ok(format_files_text(&files))
                }
            }
            Commands::List { templates, format } => {
                let tab = if *templates {
                    NarrativeTab::Template
                } else {
                    NarrativeTab::Normal
                };
                let narratives = self.block_on(self.client.list_narratives())?;
                let visible = filter_by_tab(&narratives, tab);
                if format == "json" {
                    to_pretty_json(&visible)
                } else {
                    Ok(format_narrative_list_text(&visible, tab))
                }
            }
            Commands::Show { id, format } => {
                let narrative = self.block_on(self.client.get_narrative(*id))?;
                if format == "json" {
                    to_pretty_json(&narrative)
                } else {
                    Ok(format_narrative_text(&narrative))
                }
            }
            Commands::Draft { command } => self.handle_draft_command(command),
            Commands::Save { as_new } => {
                let mode = if *as_new {
                    SaveMode::SaveAsNew
                } else {
                    SaveMode::Save
                };
                self.handle_save(mode)
            }
            Commands::Resolve { id, output } => self.handle_resolve(*id, output.as_deref()),
            Commands::Sketch { id } => {
                let narrative = self.block_on(self.client.get_narrative(*id))?;
                Ok(narrative.sketch_command())
            }
            Commands::Delete { id, yes } => self.handle_delete(*id, *yes),
        }
    }

    fn handle_draft_command(&self, command: &DraftCommands) -> Result<String, ApiError> {
        let mut builder = self.drafts.load()?;

        let message = match command {
            DraftCommands::Show { format } => {
                return if format == "json" {
                    to_pretty_json(&builder)
                } else {
                    Ok(format_draft_text(&builder))
                };
            }
            DraftCommands::Clear => {
                self.drafts.discard()?;
                return Ok("Draft cleared".to_string());
            }
            DraftCommands::Add { paths } => {
                let mut added = 0;
                let mut skipped = Vec::new();
                for path in paths {
                    match builder.handle_drop(DropPayload::AddFile { path: path.clone() })? {
                        DropOutcome::Added => added += 1,
                        _ => skipped.push(path.as_str()),
                    }
                }
                if skipped.is_empty() {
                    format!("Added {} file(s)", added)
                } else {
                    format!(
                        "Added {} file(s); already in draft: {}",
                        added,
                        skipped.join(", ")
                    )
                }
            }
            DraftCommands::Move { index, position } => {
                builder.handle_drop(DropPayload::Reorder {
                    source: StorageIndex(*index),
                    target: DisplayPosition(*position),
                })?;
                format!("Moved entry {} to position {}", index, position)
            }
            DraftCommands::Remove { index } => {
                builder.remove_context(StorageIndex(*index))?;
                format!("Removed entry {}", index)
            }
            DraftCommands::Set {
                name,
                description,
                template,
            } => {
                if let Some(name) = name {
                    builder.name = name.clone();
                }
                if let Some(description) = description {
                    builder.description = description.clone();
                }
                if let Some(template) = template {
                    builder.is_template = *template;
                }
                "Draft updated".to_string()
            }
            DraftCommands::Edit { id } => {
                let narrative = self.block_on(self.client.get_narrative(*id))?;
                builder.edit(&narrative);
                format!("Editing narrative '{}'", narrative.name)
            }
        };

        self.drafts.save(&builder)?;
        // Show the draft as the next invocation will load it, so printed
        // storage indices address the same entries.
        let saved = self.drafts.load()?;
        Ok(format!("{}\n\n{}", message, format_draft_text(&saved)))
    }

    fn handle_save(&self, mode: SaveMode) -> Result<String, ApiError> {
        let mut builder: NarrativeBuilder = self.drafts.load()?;
        let stored = self.block_on(builder.save(self.client.as_ref(), mode))?;
        self.drafts.discard()?;
        Ok(format!("Saved narrative '{}' ({})", stored.name, stored.id))
    }

    fn handle_resolve(&self, id: NarrativeId, output: Option<&Path>) -> Result<String, ApiError> {
        let content = self.block_on(self.client.resolve_narrative(id))?;
        match output {
            Some(dir) => {
                let dir = if dir.is_absolute() {
                    dir.to_path_buf()
                } else {
                    self.workspace_root.join(dir)
                };
                let path = write_export(&dir, id, &content)?;
                Ok(format!("Wrote {}", path.display()))
            }
            None => Ok(content),
        }
    }

    fn handle_delete(&self, id: NarrativeId, yes: bool) -> Result<String, ApiError> {
        if !yes {
            use dialoguer::Confirm;
            let confirmed = Confirm::new()
                .with_prompt(format!("Delete narrative {}?", id))
                .interact()
                .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;

            if !confirmed {
                return Ok("Deletion cancelled".to_string());
            }
        }

        self.block_on(self.client.delete_narrative(id))?;
        Ok(format!("Deleted narrative {}", id))
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
