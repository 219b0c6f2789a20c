//! LruCache: index and recency list kept in lockstep

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::index::Index;
use crate::list::{RecencyList, Slot};
use crate::stats::CacheStats;
use crate::{Key, Value};

/// Most slots reserved up front, larger caches grow on demand
const MAX_PREALLOC: usize = 4096;

/// Fixed-capacity LRU cache
///
/// Every mutation of the index and the recency list happens inside a single
/// `&mut self` method, so the two never disagree once a call returns.
pub struct LruCache {
    /// Key -> slot lookup
    index: Index,

    /// Entries ordered from most to least recently used
    list: RecencyList,

    /// Maximum number of entries, fixed at construction
    capacity: usize,

    /// Cache statistics
    stats: CacheStats,
}

impl LruCache {
    /// Create a new cache holding at most `capacity` entries
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, at least 1
    ///
    /// # Returns
    /// * `Result<LruCache>` - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(Error::InvalidCapacity(capacity));
        }
        debug!(capacity, "creating LRU cache");

        let reserve = capacity.min(MAX_PREALLOC);
        Ok(Self {
            index: Index::with_capacity(reserve),
            list: RecencyList::with_capacity(reserve),
            capacity,
            stats: CacheStats::new(),
        })
    }

    /// Get a value and mark its key as most recently used
    ///
    /// A miss leaves entries and their order untouched.
    pub fn get(&mut self, key: Key) -> Option<Value> {
        let Some(slot) = self.index.get(key) else {
            self.stats.record_miss();
            return None;
        };

        let value = self.list.value(slot);
        self.touch(slot);
        self.stats.record_hit();
        Some(value)
    }

    /// Insert or update a key, evicting the least recently used entry when
    /// a new key arrives at full capacity
    pub fn put(&mut self, key: Key, value: Value) {
        if let Some(slot) = self.index.get(key) {
            self.list.set_value(slot, value);
            self.touch(slot);
            return;
        }

        if self.index.len() == self.capacity {
            if let Some((evicted, _)) = self.list.evict_least_recent() {
                self.index.remove(evicted);
                self.stats.record_eviction();
                trace!(key = evicted, "evicted least recently used entry");
            }
        }

        let slot = self.list.alloc(key, value);
        self.list.insert_front(slot);
        self.index.insert(key, slot);
        self.stats.record_insert();
        self.debug_check();
    }

    /// Get a value without changing recency or statistics
    pub fn peek(&self, key: Key) -> Option<Value> {
        self.index.get(key).map(|slot| self.list.value(slot))
    }

    /// Check whether a key is cached without changing recency
    pub fn contains(&self, key: Key) -> bool {
        self.index.contains(key)
    }

    /// Remove a key from the cache
    pub fn remove(&mut self, key: Key) -> Option<Value> {
        let slot = self.index.remove(key)?;
        let (_, value) = self.list.release(slot);
        self.debug_check();
        Some(value)
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Drop every entry and reset statistics (capacity is unchanged)
    pub fn clear(&mut self) {
        debug!(entries = self.index.len(), "clearing LRU cache");
        self.index.clear();
        self.list.clear();
        self.stats.reset();
    }

    /// Iterate keys from most to least recently used
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.list.iter().map(|(key, _)| key)
    }

    /// Iterate `(key, value)` pairs from most to least recently used
    pub fn iter(&self) -> impl Iterator<Item = (Key, Value)> + '_ {
        self.list.iter()
    }

    /// Promote an entry to most recently used
    fn touch(&mut self, slot: Slot) {
        if self.list.is_front(slot) {
            return;
        }
        self.list.unlink(slot);
        self.list.insert_front(slot);
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.index.len(), self.list.len());
        debug_assert!(self.index.len() <= self.capacity);
    }
}

impl std::fmt::Debug for LruCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.list.iter().collect::<Vec<_>>())
            .field("stats", &self.stats)
            .finish()
    }
}
