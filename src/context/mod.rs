//! Context domain: context entries and the ordered list that holds them.
//! Owns ordering behavior; the narrative builder and CLI consume it via explicit index types.

pub mod list;
pub mod shared;

pub use list::OrderedContextList;
pub use shared::SharedContextList;

use serde::{Deserialize, Serialize};

/// How much of a referenced file a context entry pulls in.
///
/// Passed through unchanged by the ordering core; only the backend's resolver
/// interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IncludeType {
    #[default]
    Full,
    Section {
        section: String,
    },
    Lines {
        start: usize,
        end: usize,
    },
}

/// One file reference plus its inclusion mode and display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEntry {
    pub path: String,
    #[serde(default)]
    pub include_type: IncludeType,
    pub order: usize,
}

impl ContextEntry {
    pub fn new(path: impl Into<String>, include_type: IncludeType, order: usize) -> Self {
        Self {
            path: path.into(),
            include_type,
            order,
        }
    }
}
