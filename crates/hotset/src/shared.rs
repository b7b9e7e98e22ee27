//! SharedCache: lock-wrapped LRU cache with statistics

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Cache handle safe to share across threads.
///
/// Wraps every [`LruCache`] operation in a single coarse lock, which is
/// sufficient because each operation is O(1) and never blocks. Values are
/// cloned out of the lock; no borrow of an entry escapes. Hit/miss
/// statistics are recorded at this layer, leaving the core cache
/// counter-free for single-owner use.
pub struct SharedCache<K, V> {
    cache: Arc<RwLock<LruCache<K, V>>>,
    stats: Arc<CacheStats>,
    capacity: usize,
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new shared cache with the given capacity
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: Arc::new(RwLock::new(LruCache::new(capacity))),
            stats: Arc::new(CacheStats::new()),
            capacity,
        }
    }

    /// Insert a key/value pair, refreshing the key's recency
    pub fn insert(&self, key: K, value: V) {
        let mut cache = self.cache.write();
        let evicting = cache.len() == cache.capacity() && !cache.contains_key(&key);
        cache.insert(key, value);

        if evicting {
            self.stats.record_eviction();
        }
        self.stats.record_insert();
    }

    /// Look up a value, counting the access as a use
    pub fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.cache.write();
        match cache.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// The key of the most recently used entry, if any
    pub fn most_recent_key(&self) -> Option<K> {
        self.cache.read().most_recent_key().cloned()
    }

    /// Evict the least recently used entry, returning the evicted pair
    pub fn evict_least_recent(&self) -> Result<(K, V)> {
        let evicted = self.cache.write().evict_least_recent()?;
        self.stats.record_eviction();
        Ok(evicted)
    }

    /// Update a resident key's value in place, returning the previous value
    pub fn replace(&self, key: &K, value: V) -> Result<V> {
        self.cache.write().replace(key, value)
    }

    /// Remove a key from the cache, returning its value if it was resident
    pub fn remove(&self, key: &K) -> Option<V> {
        self.cache.write().remove(key)
    }

    /// Number of resident entries
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Maximum number of entries the cache will hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Drop every entry and reset statistics
    pub fn clear(&self) {
        let mut cache = self.cache.write();
        cache.clear();
        self.stats.reset();
    }
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            stats: Arc::clone(&self.stats),
            capacity: self.capacity,
        }
    }
}
