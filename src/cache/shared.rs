//! Shared Cache Module
//!
//! Thread-safe handle around [`CacheStore`]. Every operation holds one
//! instance-wide lock for its whole duration.

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::config::Config;
use crate::error::Result;

// == Cache ==
/// Fixed-capacity LRU cache safe to share between threads.
///
/// Share it across threads or tasks with `Arc<Cache<V>>`. `get` reorders the
/// recency list, so reads and writes take the same exclusive lock.
///
/// # Example
/// ```
/// use mini_lru::Cache;
///
/// let cache = Cache::new(2).unwrap();
/// cache.add("a", 1);
/// cache.add("b", 2);
/// cache.get("a");
/// cache.add("c", 3);
///
/// assert_eq!(cache.get("b"), None);
/// assert_eq!(cache.get("a"), Some(1));
/// ```
#[derive(Debug)]
pub struct Cache<V> {
    inner: Mutex<CacheStore<V>>,
}

impl<V> Cache<V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let store = CacheStore::new(capacity)?;
        debug!(capacity, "cache created");
        Ok(Self {
            inner: Mutex::new(store),
        })
    }

    /// Creates an empty cache sized from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.capacity)
    }

    // == Add ==
    /// Adds a new entry. Returns false, changing nothing, if the key exists.
    pub fn add(&self, key: impl Into<String>, value: V) -> bool {
        self.inner.lock().add(key.into(), value)
    }

    // == Change Value ==
    /// Overwrites the value of an existing key and promotes it.
    pub fn change_value(&self, key: &str, value: V) -> bool {
        self.inner.lock().change_value(key, value)
    }

    // == Remove ==
    /// Removes an entry. Returns false if the key is absent.
    pub fn remove(&self, key: &str) -> bool {
        self.inner.lock().remove(key)
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    // == Change Capacity ==
    /// Changes the capacity bound; zero is ignored.
    pub fn change_capacity(&self, new_capacity: usize) {
        self.inner.lock().change_capacity(new_capacity);
    }

    // == Enumeration ==
    /// Returns all keys, most recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().keys()
    }

    // == Contains ==
    /// Checks whether a key is present without promoting it.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains(key)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the current capacity bound.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }
}

impl<V: Clone> Cache<V> {
    // == Get ==
    /// Returns a copy of the value and marks the entry most recently used.
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }

    // == Values ==
    /// Returns a copy of every value, most recently used first.
    pub fn values(&self) -> Vec<V> {
        self.inner.lock().values().cloned().collect()
    }
}
