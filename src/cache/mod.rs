//! Cache Module
//!
//! Provides a manually populated cache with LRU eviction, plus a
//! thread-safe wrapper.

mod entry;
mod lru;
mod store;
mod sync;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruList;
pub use store::LruCache;
pub use sync::SyncLruCache;

// == Public Constants ==
/// Capacity used by [`CacheConfig::default`](crate::config::CacheConfig)
pub const DEFAULT_CAPACITY: usize = 100;
