//! Shared handle over an ordered context list.
//!
//! Each operation holds the list lock for its full duration, so concurrent
//! callers see moves applied one at a time and the dense-order invariant is
//! never observed half-updated.

use crate::context::{ContextEntry, IncludeType, OrderedContextList};
use crate::error::ListError;
use crate::types::{DisplayPosition, StorageIndex};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, thread-safe owner of one `OrderedContextList`.
#[derive(Debug, Clone, Default)]
pub struct SharedContextList {
    inner: Arc<Mutex<OrderedContextList>>,
}

impl SharedContextList {
    pub fn new(list: OrderedContextList) -> Self {
        Self {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    pub fn append(&self, path: impl Into<String>, include_type: IncludeType) -> bool {
        self.inner.lock().append(path, include_type)
    }

    pub fn remove_at(&self, index: StorageIndex) -> Result<ContextEntry, ListError> {
        self.inner.lock().remove_at(index)
    }

    pub fn move_to_position(
        &self,
        source: StorageIndex,
        target: DisplayPosition,
    ) -> Result<(), ListError> {
        self.inner.lock().move_to_position(source, target)
    }

    pub fn clear(&self) {
        self.inner.lock().clear()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Point-in-time copy of the list.
    pub fn snapshot(&self) -> OrderedContextList {
        self.inner.lock().clone()
    }

    /// Run `f` with exclusive access, for multi-step edits that must not
    /// interleave with other callers.
    pub fn with_list<R>(&self, f: impl FnOnce(&mut OrderedContextList) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

impl From<OrderedContextList> for SharedContextList {
    fn from(list: OrderedContextList) -> Self {
        Self::new(list)
    }
}
