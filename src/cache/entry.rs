//! Cache Entry Module
//!
//! Defines the structure for individual resident cache entries.

// == Cache Entry ==
/// A resident (key, value) pair.
///
/// The key is kept alongside the value so eviction from the recency list
/// can find the index slot to clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// The caller-supplied key
    pub key: K,
    /// The stored value, last write wins
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new cache entry.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    // == Replace ==
    /// Overwrites the stored value; the key is unchanged.
    pub fn replace(&mut self, value: V) {
        self.value = value;
    }
}
