//! Draft persistence for the narrative builder.
//!
//! The CLI rebuilds its builder on every invocation, so the in-progress
//! narrative lives in a JSON file between commands.

use crate::error::ApiError;
use crate::narrative::NarrativeBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved draft, or an empty builder if none exists.
    pub fn load(&self) -> Result<NarrativeBuilder, ApiError> {
        if !self.path.exists() {
            return Ok(NarrativeBuilder::default());
        }

        let json = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| {
            ApiError::DraftError(format!(
                "Failed to parse draft {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    pub fn save(&self, builder: &NarrativeBuilder) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(builder)
            .map_err(|e| ApiError::DraftError(format!("Failed to serialize draft: {}", e)))?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), entries = builder.contexts().len(), "Saved draft");
        Ok(())
    }

    /// Remove the draft file; a missing file is not an error.
    pub fn discard(&self) -> Result<(), ApiError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
