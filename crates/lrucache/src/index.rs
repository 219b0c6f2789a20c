//! Key index: maps each cached key to its slot in the recency list arena.

use std::collections::HashMap;

use ahash::RandomState;

use crate::list::Slot;
use crate::Key;

/// Hash index from key to arena slot
///
/// Holds no entries itself, slots are handles into the recency list arena.
pub(crate) struct Index {
    map: HashMap<Key, Slot, RandomState>,
}

impl Index {
    /// Create an index sized for `capacity` keys
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    pub(crate) fn contains(&self, key: Key) -> bool {
        self.map.contains_key(&key)
    }

    /// Resolve a key to its slot, `None` if absent
    pub(crate) fn get(&self, key: Key) -> Option<Slot> {
        self.map.get(&key).copied()
    }

    /// Map `key` to `slot`, replacing any previous mapping
    pub(crate) fn insert(&mut self, key: Key, slot: Slot) {
        self.map.insert(key, slot);
    }

    /// Drop the mapping for `key`, returning its slot if it was present
    pub(crate) fn remove(&mut self, key: Key) -> Option<Slot> {
        self.map.remove(&key)
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}
