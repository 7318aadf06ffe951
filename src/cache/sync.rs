//! Synchronized Cache Module
//!
//! Thread-safe wrapper serializing every call through one mutex.

use std::borrow::Borrow;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::cache::LruCache;
use crate::config::CacheConfig;
use crate::error::Result;

// == Sync LRU Cache ==
/// [`LruCache`] behind a single exclusive lock.
///
/// Each call holds the lock for exactly one engine operation, so concurrent
/// callers observe some serial order of their calls. The lock does not
/// poison: a caller panicking elsewhere never turns later calls into errors.
/// Share across threads with `Arc`.
#[derive(Debug)]
pub struct SyncLruCache<K, V> {
    inner: Mutex<LruCache<K, V>>,
}

impl<K, V> SyncLruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from(LruCache::new(capacity)?))
    }

    /// Creates an empty cache from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Ok(Self::from(LruCache::from_config(config)?))
    }

    // == Put ==
    /// See [`LruCache::put`].
    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    // == Get ==
    /// See [`LruCache::get`]. The value is cloned out while the lock is held.
    pub fn get<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    // == Contains ==
    /// See [`LruCache::contains`].
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains(key)
    }

    // == Capacity ==
    /// Returns the maximum number of resident entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    // == Length ==
    /// Returns the current number of resident entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    // == Into Inner ==
    /// Unwraps the underlying unsynchronized cache.
    pub fn into_inner(self) -> LruCache<K, V> {
        self.inner.into_inner()
    }
}

impl<K, V> From<LruCache<K, V>> for SyncLruCache<K, V> {
    fn from(cache: LruCache<K, V>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }
}
