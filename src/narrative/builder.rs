//! Narrative Builder
//!
//! Controller state for assembling a narrative: its details plus the ordered
//! context list. Drag-and-drop gestures arrive as explicit [`DropPayload`]s;
//! saving goes through a [`NarrativeApi`] and only clears the builder once the
//! backend has accepted the narrative.

use crate::client::NarrativeApi;
use crate::context::{IncludeType, OrderedContextList};
use crate::error::ApiError;
use crate::narrative::Narrative;
use crate::types::{DisplayPosition, NarrativeId, StorageIndex};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// What a drop onto the context list carries.
///
/// Adding a file and reordering an entry are distinct gestures with distinct
/// payloads; the builder never guesses one from the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropPayload {
    /// A file dragged in from the file list
    AddFile { path: String },
    /// An existing entry dragged onto a drop zone
    Reorder {
        source: StorageIndex,
        target: DisplayPosition,
    },
}

/// Result of handling a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Added,
    /// The file was already in the list; nothing changed
    Duplicate,
    Moved,
}

/// How a save addresses the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Update the narrative being edited, or create one if none is loaded
    Save,
    /// Always create a new narrative, even while editing an existing one
    SaveAsNew,
}

/// In-progress narrative
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeBuilder {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Identity of the narrative loaded for editing, if any
    #[serde(default)]
    pub current_id: Option<NarrativeId>,
    #[serde(default)]
    pub is_template: bool,
    #[serde(default)]
    contexts: OrderedContextList,
}

impl NarrativeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contexts(&self) -> &OrderedContextList {
        &self.contexts
    }

    pub fn handle_drop(&mut self, payload: DropPayload) -> Result<DropOutcome, ApiError> {
        match payload {
            DropPayload::AddFile { path } => Ok(self.add_file(path, IncludeType::Full)),
            DropPayload::Reorder { source, target } => {
                self.contexts.move_to_position(source, target)?;
                Ok(DropOutcome::Moved)
            }
        }
    }

    pub fn add_file(&mut self, path: impl Into<String>, include_type: IncludeType) -> DropOutcome {
        if self.contexts.append(path, include_type) {
            DropOutcome::Added
        } else {
            DropOutcome::Duplicate
        }
    }

    pub fn remove_context(&mut self, index: StorageIndex) -> Result<(), ApiError> {
        self.contexts.remove_at(index)?;
        Ok(())
    }

    /// Assemble the narrative a save would send, without touching the builder.
    pub fn build(&self, mode: SaveMode) -> Result<Narrative, ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::InvalidNarrative(
                "a narrative needs a name".to_string(),
            ));
        }
        if self.contexts.is_empty() {
            return Err(ApiError::InvalidNarrative(
                "a narrative needs at least one context item".to_string(),
            ));
        }

        let id = match mode {
            SaveMode::Save => self.current_id.unwrap_or_else(Uuid::nil),
            SaveMode::SaveAsNew => Uuid::nil(),
        };
        let description = if self.description.trim().is_empty() {
            None
        } else {
            Some(self.description.clone())
        };
        let now = Utc::now();

        Ok(Narrative {
            id,
            name: self.name.clone(),
            description,
            is_template: self.is_template,
            contexts: self.contexts.to_ordered_vec(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Persist the narrative and reset the builder.
    ///
    /// If validation or the backend call fails, the builder is left exactly as
    /// it was so the save can be retried.
    pub async fn save(
        &mut self,
        api: &dyn NarrativeApi,
        mode: SaveMode,
    ) -> Result<Narrative, ApiError> {
        let narrative = self.build(mode)?;

        let result = match (mode, self.current_id) {
            (SaveMode::Save, Some(id)) => api.update_narrative(id, &narrative).await,
            _ => api.create_narrative(&narrative).await,
        };

        match result {
            Ok(stored) => {
                info!(id = %stored.id, name = %stored.name, "Saved narrative");
                self.clear();
                Ok(stored)
            }
            Err(e) => {
                warn!(error = %e, "Failed to save narrative; builder state kept");
                Err(e)
            }
        }
    }

    /// Load an existing narrative for editing, replacing the current state.
    pub fn edit(&mut self, narrative: &Narrative) {
        debug!(id = %narrative.id, "Loading narrative into builder");
        self.name = narrative.name.clone();
        self.description = narrative.description.clone().unwrap_or_default();
        self.current_id = Some(narrative.id);
        self.is_template = narrative.is_template;
        self.contexts = OrderedContextList::from_entries(narrative.contexts.clone());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
