//! Recency list: arena-backed doubly-linked list ordered from most to least
//! recently used.
//!
//! Entries live in a `Vec` and link to each other by slot index. Slots 0 and
//! 1 hold the head and tail sentinels, so every real entry always has both
//! neighbours and splicing never branches on an empty list.

use crate::{Key, Value};

/// Index of an entry in the arena
pub(crate) type Slot = usize;

/// Head sentinel slot, its successor is the most recently used entry
const HEAD: Slot = 0;

/// Tail sentinel slot, its predecessor is the least recently used entry
const TAIL: Slot = 1;

/// One cached key-value pair and its position in the list
///
/// A detached entry links to itself.
struct Entry {
    key: Key,
    value: Value,
    prev: Slot,
    next: Slot,
}

impl Entry {
    fn sentinel() -> Self {
        Self {
            key: 0,
            value: 0,
            prev: HEAD,
            next: TAIL,
        }
    }

    fn detached(slot: Slot, key: Key, value: Value) -> Self {
        Self {
            key,
            value,
            prev: slot,
            next: slot,
        }
    }
}

/// Doubly-linked recency list owning every cached entry
pub(crate) struct RecencyList {
    entries: Vec<Entry>,
    free_list: Vec<Slot>,
    len: usize,
}

impl RecencyList {
    /// Create an empty list with room for `capacity` entries plus sentinels
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(capacity.saturating_add(2));
        entries.push(Entry::sentinel());
        entries.push(Entry::sentinel());

        Self {
            entries,
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Store a new detached entry, reusing a freed slot when one exists
    pub(crate) fn alloc(&mut self, key: Key, value: Value) -> Slot {
        if let Some(slot) = self.free_list.pop() {
            self.entries[slot] = Entry::detached(slot, key, value);
            slot
        } else {
            let slot = self.entries.len();
            self.entries.push(Entry::detached(slot, key, value));
            slot
        }
    }

    /// Splice a detached entry in right after the head sentinel
    pub(crate) fn insert_front(&mut self, slot: Slot) {
        debug_assert!(self.is_detached(slot), "slot {} is already linked", slot);

        let first = self.entries[HEAD].next;
        {
            let entry = &mut self.entries[slot];
            entry.prev = HEAD;
            entry.next = first;
        }
        self.entries[first].prev = slot;
        self.entries[HEAD].next = slot;
        self.len += 1;
    }

    /// Detach an entry by joining its neighbours
    pub(crate) fn unlink(&mut self, slot: Slot) {
        debug_assert!(slot != HEAD && slot != TAIL, "sentinels are never unlinked");
        debug_assert!(!self.is_detached(slot), "slot {} is not linked", slot);

        let (prev, next) = {
            let entry = &self.entries[slot];
            (entry.prev, entry.next)
        };
        self.entries[prev].next = next;
        self.entries[next].prev = prev;

        let entry = &mut self.entries[slot];
        entry.prev = slot;
        entry.next = slot;
        self.len -= 1;
    }

    /// Remove the least recently used entry
    ///
    /// Returns `None` when the list holds no entries.
    pub(crate) fn evict_least_recent(&mut self) -> Option<(Key, Value)> {
        let last = self.entries[TAIL].prev;
        if last == HEAD {
            return None;
        }
        Some(self.release(last))
    }

    /// Unlink an entry and return its slot to the free list
    pub(crate) fn release(&mut self, slot: Slot) -> (Key, Value) {
        self.unlink(slot);
        self.free_list.push(slot);

        let entry = &self.entries[slot];
        (entry.key, entry.value)
    }

    pub(crate) fn value(&self, slot: Slot) -> Value {
        self.entries[slot].value
    }

    pub(crate) fn set_value(&mut self, slot: Slot, value: Value) {
        self.entries[slot].value = value;
    }

    /// Whether `slot` is the most recently used entry
    pub(crate) fn is_front(&self, slot: Slot) -> bool {
        self.entries[HEAD].next == slot
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Drop every entry, keeping the sentinels
    pub(crate) fn clear(&mut self) {
        self.entries.truncate(2);
        self.entries[HEAD].next = TAIL;
        self.entries[TAIL].prev = HEAD;
        self.free_list.clear();
        self.len = 0;
    }

    /// Iterate entries from most to least recently used
    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.entries[HEAD].next,
        }
    }

    fn is_detached(&self, slot: Slot) -> bool {
        let entry = &self.entries[slot];
        entry.prev == slot && entry.next == slot
    }
}

/// Iterator over `(key, value)` pairs in recency order
pub(crate) struct Iter<'a> {
    list: &'a RecencyList,
    cursor: Slot,
}

impl Iterator for Iter<'_> {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == TAIL {
            return None;
        }
        let entry = &self.list.entries[self.cursor];
        self.cursor = entry.next;
        Some((entry.key, entry.value))
    }
}
