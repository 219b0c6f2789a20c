//! Property-based tests checking LruCache against a reference model

use lrucache::{Key, LruCache, Value};
use proptest::prelude::*;

/// Operation on the cache
#[derive(Debug, Clone)]
enum Op {
    Get(Key),
    Put(Key, Value),
    Remove(Key),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Small key space so hits, updates and evictions all happen often
    prop_oneof![
        4 => (0..8i32).prop_map(Op::Get),
        5 => (0..8i32, any::<i32>()).prop_map(|(k, v)| Op::Put(k, v)),
        1 => (0..8i32).prop_map(Op::Remove),
    ]
}

/// Naive LRU: a vector ordered from most to least recently used
struct Model {
    capacity: usize,
    entries: Vec<(Key, Value)>,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    fn position(&self, key: Key) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    fn get(&mut self, key: Key) -> Option<Value> {
        let pos = self.position(key)?;
        let entry = self.entries.remove(pos);
        self.entries.insert(0, entry);
        Some(entry.1)
    }

    fn put(&mut self, key: Key, value: Value) {
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
        } else if self.entries.len() == self.capacity {
            self.entries.pop();
        }
        self.entries.insert(0, (key, value));
    }

    fn remove(&mut self, key: Key) -> Option<Value> {
        let pos = self.position(key)?;
        Some(self.entries.remove(pos).1)
    }
}

proptest! {
    #[test]
    fn prop_matches_model(capacity in 1usize..6, ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut cache = LruCache::new(capacity).unwrap();
        let mut model = Model::new(capacity);

        for op in ops {
            match op {
                Op::Get(k) => prop_assert_eq!(cache.get(k), model.get(k)),
                Op::Put(k, v) => {
                    cache.put(k, v);
                    model.put(k, v);
                }
                Op::Remove(k) => prop_assert_eq!(cache.remove(k), model.remove(k)),
            }

            prop_assert!(cache.len() <= capacity);
            prop_assert_eq!(cache.len(), cache.keys().count());
            prop_assert_eq!(cache.iter().collect::<Vec<_>>(), model.entries.clone());
        }
    }

    #[test]
    fn prop_overwrite_keeps_size(capacity in 1usize..6, key in any::<i32>(), v1 in any::<i32>(), v2 in any::<i32>()) {
        let mut cache = LruCache::new(capacity).unwrap();

        cache.put(key, v1);
        let size = cache.len();
        cache.put(key, v2);

        prop_assert_eq!(cache.len(), size);
        prop_assert_eq!(cache.get(key), Some(v2));
    }

    #[test]
    fn prop_overflow_evicts_first_key(capacity in 1usize..16) {
        let mut cache = LruCache::new(capacity).unwrap();

        for k in 0..=capacity as i32 {
            cache.put(k, k);
        }

        prop_assert_eq!(cache.get(0), None);
        for k in 1..=capacity as i32 {
            prop_assert_eq!(cache.get(k), Some(k));
        }
    }

    #[test]
    fn prop_get_promotes(capacity in 2usize..16) {
        let mut cache = LruCache::new(capacity).unwrap();

        for k in 0..capacity as i32 {
            cache.put(k, k);
        }
        prop_assert_eq!(cache.get(0), Some(0));

        // Key 1 was least recently used at the time of the get
        cache.put(100, 100);
        prop_assert!(!cache.contains(1));
        prop_assert!(cache.contains(0));

        // Key 0 survives until every key older than it is gone
        for k in 101..(100 + capacity as i32 - 1) {
            cache.put(k, k);
        }
        prop_assert!(cache.contains(0));
    }

    #[test]
    fn prop_repeated_get_is_idempotent(capacity in 1usize..8, reads in 1usize..10) {
        let mut cache = LruCache::new(capacity).unwrap();
        for k in 0..capacity as i32 {
            cache.put(k, k * 2);
        }
        let target = capacity as i32 - 1;

        for _ in 0..reads {
            prop_assert_eq!(cache.get(target), Some(target * 2));
        }

        prop_assert_eq!(cache.len(), capacity);
        for k in 0..capacity as i32 {
            prop_assert!(cache.contains(k));
        }
    }
}
