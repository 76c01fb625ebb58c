//! Core index and identity types.
//!
//! A context list is addressed in two distinct index spaces. Storage indices
//! name an entry by where it sits in the backing collection; display positions
//! name a slot in the sequence sorted by `order`. Keeping them as separate types
//! stops one being passed where the other is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Narrative identity as assigned by the backend
pub type NarrativeId = uuid::Uuid;

/// Position of an entry in the list's backing storage (insertion sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageIndex(pub usize);

/// Position in the display-sorted sequence, or a drop zone between entries.
///
/// For a list of `n` entries, drop zones run from `0` (before the first entry)
/// to `n` (after the last entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayPosition(pub usize);

impl StorageIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

impl DisplayPosition {
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for StorageIndex {
    fn from(index: usize) -> Self {
        StorageIndex(index)
    }
}

impl From<usize> for DisplayPosition {
    fn from(position: usize) -> Self {
        DisplayPosition(position)
    }
}

impl fmt::Display for StorageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for DisplayPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
