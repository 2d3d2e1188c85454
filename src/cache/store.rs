//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with the recency list.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheStats, Entry, RecencyList};
use crate::error::{CacheError, Result};

/// Upper bound on the slots reserved up front; larger caches grow on demand.
const PREALLOC_LIMIT: usize = 1024;

// == Cache Store ==
/// Unsynchronized LRU cache engine.
///
/// The index maps every key to the handle of its node in the recency list.
/// Both structures always hold exactly the same key set.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key to node handle
    index: HashMap<String, usize>,
    /// Entries ordered from most to least recently used
    list: RecencyList<V>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        let reserve = capacity.min(PREALLOC_LIMIT);
        Ok(Self {
            index: HashMap::with_capacity(reserve),
            list: RecencyList::with_capacity(reserve),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Add ==
    /// Inserts a new entry at the front of the recency list.
    ///
    /// Returns false and leaves the cache untouched if the key already
    /// exists; an existing entry is neither overwritten nor promoted. When
    /// the cache is full the least recently used entry is evicted first.
    pub fn add(&mut self, key: String, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }

        if self.list.len() >= self.capacity && self.evict_back().is_some() {
            self.stats.record_eviction();
        }

        let idx = self.list.push_front(Entry::new(key.clone(), value));
        self.index.insert(key, idx);
        true
    }

    // == Get ==
    /// Retrieves a value by key and marks it as most recently used.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let Some(&idx) = self.index.get(key) else {
            self.stats.record_miss();
            return None;
        };

        self.stats.record_hit();
        self.list.move_to_front(idx);
        self.list.get(idx).map(|entry| &entry.value)
    }

    // == Change Value ==
    /// Overwrites the value of an existing key and marks it as most
    /// recently used.
    ///
    /// Returns false if the key is absent.
    pub fn change_value(&mut self, key: &str, value: V) -> bool {
        let Some(&idx) = self.index.get(key) else {
            return false;
        };

        if let Some(entry) = self.list.get_mut(idx) {
            entry.value = value;
        }
        self.list.move_to_front(idx);
        true
    }

    // == Remove ==
    /// Removes an entry by key. Not counted as an eviction.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.index.remove(key) {
            Some(idx) => {
                self.list.remove(idx);
                true
            }
            None => false,
        }
    }

    // == Clear ==
    /// Removes every entry, least recently used first.
    pub fn clear(&mut self) {
        let mut removed = 0usize;
        while self.evict_back().is_some() {
            removed += 1;
        }
        debug!(removed, "cache cleared");
    }

    // == Change Capacity ==
    /// Changes the capacity bound.
    ///
    /// Zero is ignored. Shrinking below the current entry count evicts
    /// least recently used entries until the new bound holds.
    pub fn change_capacity(&mut self, new_capacity: usize) {
        if new_capacity == 0 {
            debug!("ignoring capacity change to 0");
            return;
        }

        let old_capacity = self.capacity;
        self.capacity = new_capacity;

        while self.list.len() > new_capacity {
            if self.evict_back().is_none() {
                break;
            }
            self.stats.record_eviction();
        }

        debug!(old_capacity, new_capacity, len = self.list.len(), "capacity changed");
    }

    // == Enumeration ==
    /// Returns every key, most recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.list.iter().map(|(_, entry)| entry.key.clone()).collect()
    }

    /// Iterates over every value, most recently used first.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.list.iter().map(|(_, entry)| &entry.value)
    }

    // == Contains ==
    /// Checks whether a key is present without touching recency order.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the current capacity bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.list.len(),
            capacity: self.capacity,
            ..self.stats.clone()
        }
    }

    // == Evict Back ==
    /// Drops the least recently used entry from both list and index.
    fn evict_back(&mut self) -> Option<Entry<V>> {
        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);
        debug!(key = %entry.key, "evicted least recently used entry");
        Some(entry)
    }

    // == Invariants ==
    /// Verifies that index and list describe the same entries.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.index.len() != self.list.len() {
            return Err(format!(
                "index has {} keys but list has {} nodes",
                self.index.len(),
                self.list.len()
            ));
        }

        if self.list.len() > self.capacity {
            return Err(format!(
                "length {} exceeds capacity {}",
                self.list.len(),
                self.capacity
            ));
        }

        let mut walked = 0usize;
        for (idx, entry) in self.list.iter() {
            walked += 1;
            if walked > self.list.len() {
                return Err("list walk exceeds its length".to_string());
            }
            if self.index.get(&entry.key) != Some(&idx) {
                return Err(format!("key '{}' does not map back to its node", entry.key));
            }
        }

        if walked != self.list.len() {
            return Err(format!(
                "walked {} nodes but list reports {}",
                walked,
                self.list.len()
            ));
        }

        Ok(())
    }
}
