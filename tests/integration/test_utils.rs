//! Shared test utilities for integration tests
//!
//! Provides an in-memory narrative backend that behaves like the real server:
//! creates assign fresh ids, updates replace by id, unknown ids are not found.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;
use weaver::client::{FileInfo, NarrativeApi};
use weaver::error::ApiError;
use weaver::narrative::Narrative;
use weaver::types::NarrativeId;

#[derive(Default)]
pub struct InMemoryBackend {
    narratives: Mutex<Vec<Narrative>>,
    files: Vec<FileInfo>,
    reject_writes: AtomicBool,
}

impl InMemoryBackend {
    pub fn with_files(paths: &[&str]) -> Self {
        Self {
            files: paths
                .iter()
                .map(|path| FileInfo {
                    path: path.to_string(),
                    preview: format!("preview of {}", path),
                    is_directory: false,
                })
                .collect(),
            ..Default::default()
        }
    }

    /// Make create/update fail with a server error until reset.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Vec<Narrative> {
        self.narratives.lock().clone()
    }

    pub fn insert(&self, narrative: Narrative) {
        self.narratives.lock().push(narrative);
    }

    fn check_writable(&self) -> Result<(), ApiError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(ApiError::RequestFailed(
                "status 500 Internal Server Error: storage unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl NarrativeApi for InMemoryBackend {
    async fn fetch_files(&self) -> Result<Vec<FileInfo>, ApiError> {
        Ok(self.files.clone())
    }

    async fn list_narratives(&self) -> Result<Vec<Narrative>, ApiError> {
        Ok(self.stored())
    }

    async fn get_narrative(&self, id: NarrativeId) -> Result<Narrative, ApiError> {
        self.narratives
            .lock()
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(ApiError::NarrativeNotFound(id))
    }

    async fn create_narrative(&self, narrative: &Narrative) -> Result<Narrative, ApiError> {
        self.check_writable()?;
        let mut stored = narrative.clone();
        stored.id = Uuid::new_v4();
        stored.created_at = Utc::now();
        stored.updated_at = stored.created_at;
        self.narratives.lock().push(stored.clone());
        Ok(stored)
    }

    async fn update_narrative(
        &self,
        id: NarrativeId,
        narrative: &Narrative,
    ) -> Result<Narrative, ApiError> {
        self.check_writable()?;
        let mut narratives = self.narratives.lock();
        let existing = narratives
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(ApiError::NarrativeNotFound(id))?;
        let created_at = existing.created_at;
        *existing = narrative.clone();
        existing.id = id;
        existing.created_at = created_at;
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }

    async fn resolve_narrative(&self, id: NarrativeId) -> Result<String, ApiError> {
        let narrative = self.get_narrative(id).await?;
        let mut contexts = narrative.contexts;
        contexts.sort_by_key(|entry| entry.order);
        Ok(contexts
            .iter()
            .map(|entry| format!("== {} ==", entry.path))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    async fn delete_narrative(&self, id: NarrativeId) -> Result<(), ApiError> {
        let mut narratives = self.narratives.lock();
        let before = narratives.len();
        narratives.retain(|n| n.id != id);
        if narratives.len() == before {
            return Err(ApiError::NarrativeNotFound(id));
        }
        Ok(())
    }
}

/// A stored narrative with the given paths in display order.
pub fn stored_narrative(name: &str, paths: &[&str], is_template: bool) -> Narrative {
    let now = Utc::now();
    Narrative {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        is_template,
        contexts: paths
            .iter()
            .enumerate()
            .map(|(order, path)| {
                weaver::context::ContextEntry::new(*path, weaver::context::IncludeType::Full, order)
            })
            .collect(),
        created_at: now,
        updated_at: now,
    }
}
