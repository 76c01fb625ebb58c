//! Narratives
//!
//! Named, ordered bundles of context entries, optionally marked as reusable
//! templates. The backend owns storage; this module owns the client-side model
//! and the builder that assembles one.

pub mod builder;
pub mod draft;
pub mod export;

pub use builder::{DropOutcome, DropPayload, NarrativeBuilder, SaveMode};
pub use draft::DraftStore;
pub use export::{export_file_name, write_export};

use crate::context::ContextEntry;
use crate::types::NarrativeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Narrative as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub id: NarrativeId,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_template: bool,
    pub contexts: Vec<ContextEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Narrative {
    /// Command line that asks a writing agent to sketch from this narrative.
    pub fn sketch_command(&self) -> String {
        match self.description.as_deref().map(str::trim) {
            Some(description) if !description.is_empty() => {
                format!("/sketch {} {}", self.id, description)
            }
            _ => format!("/sketch {}", self.id),
        }
    }

    /// Whether the backend has assigned this narrative an identity yet.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_nil()
    }
}

/// Which saved narratives a listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeTab {
    #[default]
    Normal,
    Template,
}

impl NarrativeTab {
    pub fn matches(self, narrative: &Narrative) -> bool {
        match self {
            NarrativeTab::Normal => !narrative.is_template,
            NarrativeTab::Template => narrative.is_template,
        }
    }
}

/// Narratives belonging to `tab`, in the order given.
pub fn filter_by_tab(narratives: &[Narrative], tab: NarrativeTab) -> Vec<&Narrative> {
    narratives.iter().filter(|n| tab.matches(n)).collect()
}
