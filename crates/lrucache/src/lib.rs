//! # lrucache
//!
//! Fixed-capacity least-recently-used cache.
//!
//! ## Architecture
//! - **Index**: AHash map from key to arena slot (O(1))
//! - **Recency List**: arena-backed doubly-linked list with head and tail
//!   sentinels, most recently used first (O(1) promote and evict)
//! - **LruCache**: the only code that mutates both, one call at a time
//!
//! ```
//! use lrucache::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put(1, 1);
//! cache.put(2, 2);
//! assert_eq!(cache.get(1), Some(1));
//! cache.put(3, 3); // evicts 2
//! assert_eq!(cache.get(2), None);
//! # Ok::<(), lrucache::Error>(())
//! ```

#![warn(missing_docs)]

mod cache;
mod error;
mod index;
mod list;
mod stats;

pub use cache::LruCache;
pub use error::{Error, Result};
pub use stats::CacheStats;

/// Cache key type
pub type Key = i32;

/// Cached value type
pub type Value = i32;
