//! Keyed entry collection with recency ordering.

use crate::error::AppError;
use crate::models::Entry;
use std::collections::HashMap;

struct Slot<T> {
    /// Insertion order; breaks ties between equal creation instants.
    seq: u64,
    entry: T,
}

pub(super) struct Collection<T> {
    slots: HashMap<String, Slot<T>>,
    next_seq: u64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<T: Entry> Collection<T> {
    /// Insert a new entry.
    ///
    /// # Errors
    /// An existing entry with the same id is an identifier collision, reported
    /// as [`AppError::Internal`]; the stored entry is left untouched.
    pub(super) fn insert(&mut self, entry: T) -> Result<(), AppError> {
        if self.slots.contains_key(entry.id()) {
            tracing::error!("Identifier collision on '{}'", entry.id());
            return Err(AppError::Internal(format!(
                "identifier '{}' is already in use",
                entry.id()
            )));
        }
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.slots
            .insert(entry.id().to_string(), Slot { seq, entry });
        Ok(())
    }

    pub(super) fn get(&self, id: &str) -> Option<&T> {
        self.slots.get(id).map(|slot| &slot.entry)
    }

    pub(super) fn remove(&mut self, id: &str) -> Option<T> {
        self.slots.remove(id).map(|slot| slot.entry)
    }

    /// Drop every entry for which `keep` returns `false`.
    ///
    /// # Returns
    /// Number of entries removed.
    pub(super) fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, slot| keep(&slot.entry));
        before - self.slots.len()
    }

    /// Clone all entries, most recently created first.
    pub(super) fn newest_first(&self) -> Vec<T> {
        let mut slots: Vec<&Slot<T>> = self.slots.values().collect();
        slots.sort_by(|a, b| {
            b.entry
                .created_at()
                .cmp(&a.entry.created_at())
                .then(b.seq.cmp(&a.seq))
        });
        slots.into_iter().map(|slot| slot.entry.clone()).collect()
    }

    pub(super) fn len(&self) -> usize {
        self.slots.len()
    }
}
