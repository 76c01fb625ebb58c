//! Error types for the Weaver narrative builder.

use thiserror::Error;
use uuid::Uuid;

/// Ordered context list errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("Storage index {index} out of bounds (list has {len} entries)")]
    StorageIndexOutOfBounds { index: usize, len: usize },

    #[error("Display position {position} out of bounds (valid range is 0..={len})")]
    DisplayPositionOutOfBounds { position: usize, len: usize },
}

/// API-level errors: builder validation, backend calls, configuration
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Narrative not found: {0}")]
    NarrativeNotFound(Uuid),

    #[error("Invalid narrative: {0}")]
    InvalidNarrative(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Draft error: {0}")]
    DraftError(String),

    #[error("Context list error: {0}")]
    List(#[from] ListError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
