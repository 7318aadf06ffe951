//! Cache Store Module
//!
//! Main cache engine combining HashMap indexing with LRU recency tracking.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, LruList};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// Capacity-bounded, manually populated LRU cache.
///
/// Entries only enter the cache through [`put`](Self::put). Both `put` and a
/// successful [`get`](Self::get) make the key most recently used;
/// [`contains`](Self::contains) is a pure probe. Not synchronized; see
/// [`SyncLruCache`](crate::cache::SyncLruCache) for shared use.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to recency-list slot
    index: HashMap<K, usize>,
    /// Resident entries, most recently used first
    order: LruList<CacheEntry<K, V>>,
    /// Maximum number of resident entries
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidConfiguration`] if `capacity` is 0.
    /// Storage is allocated as entries arrive, not up front.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of resident entries
    pub fn new(capacity: usize) -> Result<Self> {
        CacheConfig::new(capacity).validate()?;
        debug!(capacity, "creating LRU cache");

        Ok(Self {
            index: HashMap::new(),
            order: LruList::new(),
            capacity,
        })
    }

    /// Creates an empty cache from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.capacity)
    }

    // == Put ==
    /// Stores a key-value pair and makes it the most recently used.
    ///
    /// If the key already exists, the value is overwritten in place and no
    /// eviction happens. If the key is new and the cache is at capacity, the
    /// least recently used entry is evicted first.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&slot) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(slot) {
                entry.replace(value);
            }
            self.order.touch(slot);
            return;
        }

        if self.index.len() >= self.capacity {
            self.evict_lru();
        }

        let slot = self.order.push_front(CacheEntry::new(key.clone(), value));
        self.index.insert(key, slot);
    }

    // == Get ==
    /// Retrieves a value by key and makes it the most recently used.
    ///
    /// Fails with [`CacheError::CacheMiss`] if the key is not resident; a
    /// miss leaves the cache untouched.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&slot) = self.index.get(key) else {
            trace!(resident = self.index.len(), "cache miss");
            return Err(CacheError::CacheMiss);
        };

        self.order.touch(slot);
        self.order
            .get(slot)
            .map(|entry| &entry.value)
            .ok_or(CacheError::CacheMiss)
    }

    // == Contains ==
    /// Checks whether a key is resident. Does not count as a use.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    // == Keys ==
    /// Resident keys from most to least recently used. Does not count as a use.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter().map(|entry| &entry.key)
    }

    // == Capacity ==
    /// Returns the maximum number of resident entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of resident entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn evict_lru(&mut self) {
        if let Some(evicted) = self.order.pop_back() {
            self.index.remove(&evicted.key);
            trace!(
                resident = self.index.len(),
                capacity = self.capacity,
                "evicted least recently used entry"
            );
        }
    }
}
