//! Export of resolved narrative text to disk.

use crate::error::ApiError;
use crate::types::NarrativeId;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn export_file_name(id: NarrativeId) -> String {
    format!("narrative-{}.txt", id)
}

/// Write a resolved narrative into `dir`, returning the file written.
pub fn write_export(dir: &Path, id: NarrativeId, content: &str) -> Result<PathBuf, ApiError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(id));
    std::fs::write(&path, content)?;
    info!(path = %path.display(), bytes = content.len(), "Exported narrative");
    Ok(path)
}
