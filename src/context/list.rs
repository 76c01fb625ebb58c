//! Ordered Context List
//!
//! Holds the context entries of a narrative under construction. Entries keep a
//! stable storage position (the handle the UI hands back to us) and a separate
//! `order` field that defines what the user sees. Every mutation leaves the
//! `order` values dense: exactly `0..len`, no gaps, no duplicates.

use crate::context::{ContextEntry, IncludeType};
use crate::error::ListError;
use crate::types::{DisplayPosition, StorageIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Ordered collection of context entries.
///
/// Serializes as a plain sequence of entries. Deserializing goes through
/// [`OrderedContextList::from_entries`], so stored data with gaps or duplicate
/// orders is repaired on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ContextEntry>", into = "Vec<ContextEntry>")]
pub struct OrderedContextList {
    entries: Vec<ContextEntry>,
}

impl OrderedContextList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a list from previously serialized entries.
    ///
    /// Entries are ranked by their stored `order`, ties broken by their position
    /// in `entries`, then renumbered densely. Later duplicates of a path are
    /// dropped. The resulting storage sequence equals the display sequence.
    pub fn from_entries(entries: Vec<ContextEntry>) -> Self {
        let mut ranked: Vec<ContextEntry> = entries;
        // sort_by_key is stable, which gives the positional tie-break
        ranked.sort_by_key(|entry| entry.order);

        let mut seen = HashSet::new();
        let mut list = Self::new();
        for mut entry in ranked {
            if !seen.insert(entry.path.clone()) {
                debug!(path = %entry.path, "Dropping duplicate context entry on load");
                continue;
            }
            entry.order = list.entries.len();
            list.entries.push(entry);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry.path == path)
    }

    /// Entries in storage order.
    pub fn entries(&self) -> &[ContextEntry] {
        &self.entries
    }

    pub fn get(&self, index: StorageIndex) -> Option<&ContextEntry> {
        self.entries.get(index.get())
    }

    pub fn storage_index_of(&self, path: &str) -> Option<StorageIndex> {
        self.entries
            .iter()
            .position(|entry| entry.path == path)
            .map(StorageIndex)
    }

    /// Current display position of the entry stored at `index`.
    pub fn display_position_of(&self, index: StorageIndex) -> Option<DisplayPosition> {
        self.display_sequence()
            .iter()
            .position(|&storage| storage == index.get())
            .map(DisplayPosition)
    }

    /// Entries in display order, each paired with its storage index.
    pub fn sorted(&self) -> Vec<(StorageIndex, &ContextEntry)> {
        self.display_sequence()
            .into_iter()
            .map(|storage| (StorageIndex(storage), &self.entries[storage]))
            .collect()
    }

    /// Owned copy of the entries in display order, as written into a narrative.
    pub fn to_ordered_vec(&self) -> Vec<ContextEntry> {
        self.sorted()
            .into_iter()
            .map(|(_, entry)| entry.clone())
            .collect()
    }

    /// Add a new entry at the end of the display sequence.
    ///
    /// Returns `false` and leaves the list untouched when `path` is already
    /// present.
    pub fn append(&mut self, path: impl Into<String>, include_type: IncludeType) -> bool {
        let path = path.into();
        if self.contains(&path) {
            debug!(path = %path, "Ignoring duplicate context entry");
            return false;
        }

        let order = self.entries.len();
        debug!(path = %path, order, "Appending context entry");
        self.entries.push(ContextEntry {
            path,
            include_type,
            order,
        });
        true
    }

    /// Remove the entry stored at `index`, closing the gap it leaves in the
    /// display sequence.
    pub fn remove_at(&mut self, index: StorageIndex) -> Result<ContextEntry, ListError> {
        let removed_at = self.check_storage_index(index)?;

        let sequence: Vec<usize> = self
            .display_sequence()
            .into_iter()
            .filter(|&storage| storage != removed_at)
            .map(|storage| if storage > removed_at { storage - 1 } else { storage })
            .collect();

        let removed = self.entries.remove(removed_at);
        self.renumber(&sequence);

        debug!(path = %removed.path, remaining = self.entries.len(), "Removed context entry");
        Ok(removed)
    }

    /// Move the entry stored at `source` to the drop zone `target`.
    ///
    /// Drop zone `target` is the slot before the entry currently displayed at
    /// `target`; `len()` is the slot after the last entry. Dropping an entry
    /// onto either zone adjacent to itself leaves the sequence unchanged.
    pub fn move_to_position(
        &mut self,
        source: StorageIndex,
        target: DisplayPosition,
    ) -> Result<(), ListError> {
        let moving = self.check_storage_index(source)?;
        let len = self.entries.len();
        if target.get() > len {
            return Err(ListError::DisplayPositionOutOfBounds {
                position: target.get(),
                len,
            });
        }

        let mut sequence = self.display_sequence();
        let current = sequence
            .iter()
            .position(|&storage| storage == moving)
            .ok_or(ListError::StorageIndexOutOfBounds {
                index: moving,
                len,
            })?;

        sequence.remove(current);
        // Moving right past our own old slot: the removal shifted every later
        // zone down by one.
        let insert_at = if target.get() > current {
            target.get() - 1
        } else {
            target.get()
        };
        sequence.insert(insert_at, moving);
        self.renumber(&sequence);

        debug!(
            path = %self.entries[moving].path,
            from = current,
            to = insert_at,
            "Moved context entry"
        );
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn check_storage_index(&self, index: StorageIndex) -> Result<usize, ListError> {
        if index.get() >= self.entries.len() {
            return Err(ListError::StorageIndexOutOfBounds {
                index: index.get(),
                len: self.entries.len(),
            });
        }
        Ok(index.get())
    }

    /// Storage indices sorted by `order`, ties broken by storage position.
    fn display_sequence(&self) -> Vec<usize> {
        let mut sequence: Vec<usize> = (0..self.entries.len()).collect();
        sequence.sort_by_key(|&storage| self.entries[storage].order);
        sequence
    }

    fn renumber(&mut self, sequence: &[usize]) {
        for (order, &storage) in sequence.iter().enumerate() {
            self.entries[storage].order = order;
        }
    }
}

impl From<Vec<ContextEntry>> for OrderedContextList {
    fn from(entries: Vec<ContextEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<OrderedContextList> for Vec<ContextEntry> {
    fn from(list: OrderedContextList) -> Self {
        list.entries
    }
}
