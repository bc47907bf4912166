//! Fixed-capacity, index-addressed selection store

use std::sync::{Mutex, PoisonError};

use setlist_core::{Result, SetlistError, Track};

/// Records at most one chosen track per original query position.
///
/// Sized once to the query batch; each slot carries its own lock, so
/// gather callbacks running on different workers can record choices
/// for different indices without contention. A later `add` at the
/// same index overwrites the earlier one.
pub struct SelectionSet {
    slots: Vec<Mutex<Option<Track>>>,
}

impl SelectionSet {
    /// Create a set sized to the query batch.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| Mutex::new(None)).collect(),
        }
    }

    /// Number of slots, equal to the batch length at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Record the chosen track for a query position.
    ///
    /// Last write wins. Indices outside the batch are rejected with
    /// `SetlistError::IndexOutOfRange` without touching any slot.
    pub fn add(&self, index: usize, track: Track) -> Result<()> {
        let slot = self
            .slots
            .get(index)
            .ok_or_else(|| SetlistError::out_of_range(index, self.slots.len()))?;

        *lock(slot) = Some(track);
        Ok(())
    }

    /// Count of distinct filled indices, not capacity.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| lock(slot).is_some()).count()
    }

    /// Whether no track has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten filled slots into track identifiers, ordered by
    /// ascending original index regardless of insertion order.
    pub fn track_ids(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter_map(|slot| lock(slot).as_ref().map(|track| track.id.clone()))
            .collect()
    }
}

// A poisoned slot still holds a valid value; take it either way.
fn lock<T>(slot: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
