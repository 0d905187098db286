//! Comparison selection tracking.
//!
//! A bounded, insertion-ordered set of device keys. Selection is not
//! derived from the current view: members stay selected when filters hide
//! them, and are resolved back to full records against the whole dataset
//! when a comparison is built.

use crate::model::{Device, DeviceKey};
use indexmap::IndexSet;

/// Maximum number of devices in a comparison.
pub const MAX_COMPARE: usize = 5;

/// Outcome of a selection toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The device was added
    Added,
    /// The device was removed
    Removed,
    /// The set is full; nothing changed. The caller owes the user a
    /// notification, this is not an error.
    Rejected,
}

/// Insertion-ordered selection set, capped at [`MAX_COMPARE`].
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    keys: IndexSet<DeviceKey>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership. Insertion beyond capacity is rejected, never
    /// evicts.
    pub fn toggle(&mut self, key: DeviceKey) -> Toggle {
        if self.keys.shift_remove(&key) {
            return Toggle::Removed;
        }
        if self.keys.len() >= MAX_COMPARE {
            return Toggle::Rejected;
        }
        self.keys.insert(key);
        Toggle::Added
    }

    /// Empty the set unconditionally.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    #[must_use]
    pub fn contains(&self, key: &DeviceKey) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Resolve selected keys back to records, searching the full dataset
    /// rather than the currently filtered view so members hidden by a
    /// filter still resolve. Keys that no longer match any record (the
    /// dataset was refreshed underneath) are silently skipped. Display is
    /// capped at [`MAX_COMPARE`] even if more were somehow recorded.
    #[must_use]
    pub fn resolve<'a>(&self, dataset: &'a [Device]) -> Vec<&'a Device> {
        self.keys
            .iter()
            .filter_map(|key| dataset.iter().find(|d| &d.key() == key))
            .take(MAX_COMPARE)
            .collect()
    }

    /// A comparison needs at least two resolvable members.
    #[must_use]
    pub fn can_compare(&self, dataset: &[Device]) -> bool {
        self.resolve(dataset).len() >= 2
    }
}
