//! The user's multi-select "cart".
//!
//! Membership is keyed by entry id and insertion order is kept, so the
//! inquiry message lists items in the order they were picked. Every operation
//! returns a new set.

use crate::catalog::{CatalogEntry, EntryId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    entries: Vec<CatalogEntry>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `entry` when its id is present, otherwise append it.
    pub fn toggle(&self, entry: &CatalogEntry) -> Self {
        let entries = if self.contains(&entry.id) {
            self.entries
                .iter()
                .filter(|selected| selected.id != entry.id)
                .cloned()
                .collect()
        } else {
            let mut entries = self.entries.clone();
            entries.push(entry.clone());
            entries
        };
        Self { entries }
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.entries.iter().any(|selected| &selected.id == id)
    }

    pub fn clear(&self) -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selected entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }
}
