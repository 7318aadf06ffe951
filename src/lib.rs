//! Manual LRU - A capacity-bounded, manually populated LRU cache
//!
//! Entries are stored explicitly with `put` and only read back with `get`;
//! looking up a key that was never stored (or has been evicted) fails with
//! [`CacheError::CacheMiss`] instead of computing anything.
//!
//! ```
//! use manual_lru::{CacheError, LruCache};
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.get("a"), Ok(&1)); // a is now most recently used
//!
//! cache.put("c", 3); // evicts b
//! assert_eq!(cache.get("b"), Err(CacheError::CacheMiss));
//! assert!(cache.contains("a"));
//! # Ok::<(), CacheError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{LruCache, SyncLruCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
