//! LRU (Least Recently Used) cache implementation
//!
//! Couples an AHash index with a recency list over an entry arena. Every
//! touch of a resident key promotes it to the front of the list; when a new
//! key would exceed capacity, the entry at the back is evicted first.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

use crate::entry::EntryArena;
use crate::error::{Error, Result};
use crate::recency::RecencyList;

/// LRU cache with fixed capacity.
///
/// The index maps each key to the arena handle of its entry; the recency
/// list orders the same handles from most to least recently used. The two
/// structures always describe the same set of entries, so the number of
/// resident keys is simply the size of the index.
pub struct LruCache<K, V> {
    index: HashMap<K, usize, RandomState>,
    arena: EntryArena<K, V>,
    recency: RecencyList,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the given capacity.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");

        Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            arena: EntryArena::with_capacity(capacity),
            recency: RecencyList::new(),
            capacity,
        }
    }

    /// Insert a key/value pair, refreshing the key's recency.
    ///
    /// A resident key has its value updated in place. A new key evicts the
    /// least recently used entry first when the cache is full, so insertion
    /// always succeeds.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.arena.get_mut(id) {
                entry.value = value;
            }
            self.recency.promote_to_front(&mut self.arena, id);
        } else {
            if self.index.len() == self.capacity {
                self.evict_back();
            }

            let id = self.arena.alloc(key.clone(), value);
            self.index.insert(key, id);
            self.recency.promote_to_front(&mut self.arena, id);
        }
    }

    /// Look up a value, counting the access as a use.
    ///
    /// A hit promotes the entry to most recently used. A miss changes
    /// nothing.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(&id) = self.index.get(key) {
            self.recency.promote_to_front(&mut self.arena, id);
            self.arena.get(id).map(|entry| &entry.value)
        } else {
            None
        }
    }

    /// Look up a value without refreshing its recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let &id = self.index.get(key)?;
        self.arena.get(id).map(|entry| &entry.value)
    }

    /// Check whether a key is resident, without refreshing its recency.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// The key of the most recently used entry, if any. No mutation.
    pub fn most_recent_key(&self) -> Option<&K> {
        self.recency
            .front()
            .and_then(|id| self.arena.get(id))
            .map(|entry| &entry.key)
    }

    /// The key next in line for eviction, if any. No mutation.
    pub fn least_recent_key(&self) -> Option<&K> {
        self.recency
            .back()
            .and_then(|id| self.arena.get(id))
            .map(|entry| &entry.key)
    }

    /// Evict the least recently used entry, returning the evicted pair.
    ///
    /// Fails with [`Error::EmptyCache`] when there is nothing to evict.
    pub fn evict_least_recent(&mut self) -> Result<(K, V)> {
        self.evict_back().ok_or(Error::EmptyCache)
    }

    /// Update a resident key's value in place, returning the previous value.
    ///
    /// Fails with [`Error::KeyNotFound`] when the key is absent; never
    /// inserts. Recency order is untouched ([`LruCache::insert`] is the
    /// operation that both replaces and promotes).
    pub fn replace(&mut self, key: &K, value: V) -> Result<V> {
        let id = *self.index.get(key).ok_or(Error::KeyNotFound)?;
        let entry = self.arena.get_mut(id).ok_or(Error::KeyNotFound)?;
        Ok(std::mem::replace(&mut entry.value, value))
    }

    /// Remove a key from the cache, returning its value if it was resident.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.recency.remove(&mut self.arena, id);
        self.arena.release(id).map(|entry| entry.value)
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries the cache will hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.arena.clear();
        self.recency.clear();
    }

    fn evict_back(&mut self) -> Option<(K, V)> {
        let back_id = self.recency.back()?;
        self.recency.remove_back(&mut self.arena);

        let entry = self.arena.release(back_id)?;
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = LruCache::new(10);

        cache.insert("aapl".to_string(), 1);

        assert_eq!(cache.get(&"aapl".to_string()), Some(&1));
        assert_eq!(cache.get(&"msft".to_string()), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_same_pair_is_idempotent() {
        let mut cache = LruCache::new(10);

        cache.insert("aapl", 1);
        cache.insert("aapl", 1);
        cache.insert("aapl", 1);

        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_overwrites_value() {
        let mut cache = LruCache::new(2);

        cache.insert("aapl", 1);
        cache.insert("aapl", 2);

        assert_eq!(cache.get(&"aapl"), Some(&2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_overflow_evicts_coldest() {
        let mut cache = LruCache::new(5);

        for (value, key) in ["1", "2", "3", "4", "5"].iter().enumerate() {
            cache.insert(*key, value as i32 + 1);
        }
        cache.insert("6", 6);

        assert_eq!(cache.get(&"1"), None);
        assert_eq!(cache.most_recent_key(), Some(&"6"));
        assert_eq!(cache.len(), 5);
    }

    #[test]
    fn test_get_refreshes_recency() {
        let mut cache = LruCache::new(2);

        cache.insert("aapl", 1);
        cache.insert("msft", 2);
        cache.get(&"aapl");
        cache.insert("sq", 3); // evicts "msft", not the refreshed "aapl"

        assert_eq!(cache.get(&"aapl"), Some(&1));
        assert_eq!(cache.get(&"msft"), None);
        assert_eq!(cache.get(&"sq"), Some(&3));
    }

    #[test]
    fn test_most_recent_key_tracks_touches() {
        let mut cache = LruCache::new(5);

        assert_eq!(cache.most_recent_key(), None);

        cache.insert("aapl", 1);
        cache.insert("msft", 2);
        assert_eq!(cache.most_recent_key(), Some(&"msft"));

        cache.get(&"aapl");
        assert_eq!(cache.most_recent_key(), Some(&"aapl"));

        // misses and peeks do not move the front
        cache.get(&"roku");
        cache.peek(&"msft");
        assert_eq!(cache.most_recent_key(), Some(&"aapl"));
    }

    #[test]
    fn test_least_recent_key_is_eviction_candidate() {
        let mut cache = LruCache::new(3);

        cache.insert("aapl", 1);
        cache.insert("msft", 2);
        cache.insert("sq", 3);

        assert_eq!(cache.least_recent_key(), Some(&"aapl"));
        cache.get(&"aapl");
        assert_eq!(cache.least_recent_key(), Some(&"msft"));
    }

    #[test]
    fn test_evict_least_recent() {
        let mut cache = LruCache::new(5);

        cache.insert("aapl", 1);
        cache.insert("msft", 2);
        cache.insert("sq", 3);
        cache.insert("roku", 4);

        assert_eq!(cache.evict_least_recent(), Ok(("aapl", 1)));
        assert_eq!(cache.get(&"aapl"), None);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_evict_empty_cache_is_an_error() {
        let mut cache = LruCache::new(5);

        cache.insert("aapl", 1);
        cache.insert("msft", 2);

        assert!(cache.evict_least_recent().is_ok());
        assert!(cache.evict_least_recent().is_ok());
        assert_eq!(cache.evict_least_recent(), Err(Error::EmptyCache));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_most_recent_key_on_never_populated_cache() {
        let cache: LruCache<String, i64> = LruCache::new(5);

        assert_eq!(cache.most_recent_key(), None);
        assert_eq!(cache.least_recent_key(), None);
    }

    #[test]
    fn test_replace_existing_key() {
        let mut cache = LruCache::new(5);

        cache.insert("aapl", 1);

        assert_eq!(cache.replace(&"aapl", 2), Ok(1));
        assert_eq!(cache.peek(&"aapl"), Some(&2));
    }

    #[test]
    fn test_replace_missing_key_is_an_error() {
        let mut cache = LruCache::new(5);

        cache.insert("aapl", 1);

        assert_eq!(cache.replace(&"msft", 2), Err(Error::KeyNotFound));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"msft"), None);
    }

    #[test]
    fn test_replace_does_not_refresh_recency() {
        let mut cache = LruCache::new(2);

        cache.insert("aapl", 1);
        cache.insert("msft", 2);
        cache.replace(&"aapl", 9).unwrap();
        cache.insert("sq", 3); // "aapl" is still the coldest

        assert_eq!(cache.get(&"aapl"), None);
        assert_eq!(cache.peek(&"msft"), Some(&2));
    }

    #[test]
    fn test_peek_does_not_refresh_recency() {
        let mut cache = LruCache::new(2);

        cache.insert("aapl", 1);
        cache.insert("msft", 2);
        cache.peek(&"aapl");
        cache.insert("sq", 3);

        assert_eq!(cache.peek(&"aapl"), None);
        assert_eq!(cache.peek(&"msft"), Some(&2));
    }

    #[test]
    fn test_interior_promotion_preserves_eviction_order() {
        let mut cache = LruCache::new(3);

        cache.insert("aapl", 1);
        cache.insert("msft", 2);
        cache.insert("sq", 3);

        // "msft" is interior (neither front nor back) when touched
        cache.get(&"msft");
        cache.insert("roku", 4); // evicts "aapl"

        assert_eq!(cache.evict_least_recent(), Ok(("sq", 3)));
        assert_eq!(cache.evict_least_recent(), Ok(("msft", 2)));
        assert_eq!(cache.evict_least_recent(), Ok(("roku", 4)));
        assert_eq!(cache.get(&"aapl"), None);
    }

    #[test]
    fn test_remove() {
        let mut cache = LruCache::new(3);

        cache.insert("aapl", 1);
        cache.insert("msft", 2);
        cache.insert("sq", 3);

        assert_eq!(cache.remove(&"msft"), Some(2));
        assert_eq!(cache.remove(&"msft"), None);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"msft"), None);

        // removal frees capacity: inserting two more only evicts once
        cache.insert("roku", 4);
        cache.insert("amd", 5);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(&"aapl"), None);
        assert_eq!(cache.get(&"sq"), Some(&3));
    }

    #[test]
    fn test_clear() {
        let mut cache = LruCache::new(3);

        cache.insert("aapl", 1);
        cache.insert("msft", 2);
        cache.clear();

        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.most_recent_key(), None);
        assert_eq!(cache.capacity(), 3);

        cache.insert("sq", 3);
        assert_eq!(cache.get(&"sq"), Some(&3));
    }

    #[test]
    fn test_contains_key() {
        let mut cache = LruCache::new(2);

        cache.insert("aapl", 1);

        assert!(cache.contains_key(&"aapl"));
        assert!(!cache.contains_key(&"msft"));
    }

    #[test]
    fn test_size_never_exceeds_capacity() {
        let mut cache = LruCache::new(4);

        for i in 0..100u32 {
            cache.insert(i % 10, i);
            assert!(cache.len() <= cache.capacity());
        }
        assert_eq!(cache.len(), 4);
    }
}
