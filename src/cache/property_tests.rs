//! Property-Based Tests for Cache Module
//!
//! Uses proptest to drive random operation sequences against a simple
//! reference model and check structural invariants after every step.

use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};

use crate::cache::CacheStore;

// == Reference Model ==
/// Naive LRU: a deque of (key, value) pairs, front = most recently used.
struct Model {
    entries: VecDeque<(String, u32)>,
    capacity: usize,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn promote(&mut self, pos: usize) {
        if let Some(entry) = self.entries.remove(pos) {
            self.entries.push_front(entry);
        }
    }

    fn add(&mut self, key: &str, value: u32) -> bool {
        if self.position(key).is_some() {
            return false;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front((key.to_string(), value));
        true
    }

    fn get(&mut self, key: &str) -> Option<u32> {
        let pos = self.position(key)?;
        self.promote(pos);
        self.entries.front().map(|(_, v)| *v)
    }

    fn change_value(&mut self, key: &str, value: u32) -> bool {
        match self.position(key) {
            Some(pos) => {
                self.entries[pos].1 = value;
                self.promote(pos);
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    fn change_capacity(&mut self, capacity: usize) {
        if capacity == 0 {
            return;
        }
        self.capacity = capacity;
        self.entries.truncate(capacity);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }
}

// == Strategies ==
/// Small key space so that operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-f]{1,2}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: u32 },
    Get { key: String },
    ChangeValue { key: String, value: u32 },
    Remove { key: String },
    ChangeCapacity { capacity: usize },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Add { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        2 => (key_strategy(), any::<u32>())
            .prop_map(|(key, value)| CacheOp::ChangeValue { key, value }),
        2 => key_strategy().prop_map(|key| CacheOp::Remove { key }),
        1 => (0usize..12).prop_map(|capacity| CacheOp::ChangeCapacity { capacity }),
        1 => Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Every operation agrees with the reference model, and the index and
    // list stay in sync after each step.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..10,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let mut store = CacheStore::new(capacity).unwrap();
        let mut model = Model::new(capacity);

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    prop_assert_eq!(store.add(key.clone(), value), model.add(&key, value));
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key).copied(), model.get(&key));
                }
                CacheOp::ChangeValue { key, value } => {
                    prop_assert_eq!(
                        store.change_value(&key, value),
                        model.change_value(&key, value)
                    );
                }
                CacheOp::Remove { key } => {
                    prop_assert_eq!(store.remove(&key), model.remove(&key));
                }
                CacheOp::ChangeCapacity { capacity } => {
                    store.change_capacity(capacity);
                    model.change_capacity(capacity);
                }
                CacheOp::Clear => {
                    store.clear();
                    model.entries.clear();
                }
            }

            if let Err(msg) = store.check_invariants() {
                return Err(TestCaseError::fail(msg));
            }
            prop_assert_eq!(store.capacity(), model.capacity);
            prop_assert_eq!(store.keys(), model.keys());
        }
    }

    // Inserting capacity + 1 distinct keys evicts exactly the first one.
    #[test]
    fn prop_overflow_evicts_first_inserted(
        keys in prop::collection::hash_set(key_strategy(), 2..12)
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let capacity = keys.len() - 1;
        let mut store = CacheStore::new(capacity).unwrap();

        for (i, key) in keys.iter().enumerate() {
            prop_assert!(store.add(key.clone(), i as u32));
        }

        prop_assert_eq!(store.len(), capacity);
        prop_assert!(!store.contains(&keys[0]));

        let remaining: HashSet<String> = store.keys().into_iter().collect();
        let expected: HashSet<String> = keys[1..].iter().cloned().collect();
        prop_assert_eq!(remaining, expected);
    }

    // A repeated add neither overwrites nor promotes.
    #[test]
    fn prop_duplicate_add_is_ignored(
        key in key_strategy(),
        first in any::<u32>(),
        second in any::<u32>()
    ) {
        let mut store = CacheStore::new(4).unwrap();

        prop_assert!(store.add(key.clone(), first));
        prop_assert!(!store.add(key.clone(), second));
        prop_assert_eq!(store.get(&key).copied(), Some(first));
        prop_assert_eq!(store.len(), 1);
    }

    // Shrinking and raising the capacity never brings evicted keys back.
    #[test]
    fn prop_capacity_raise_is_not_destructive(
        keys in prop::collection::hash_set(key_strategy(), 3..10),
        shrink_to in 1usize..3
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut store = CacheStore::new(keys.len()).unwrap();
        for (i, key) in keys.iter().enumerate() {
            store.add(key.clone(), i as u32);
        }

        store.change_capacity(shrink_to);
        let survivors = store.keys();
        prop_assert_eq!(survivors.len(), shrink_to);
        // Survivors are the most recently inserted keys
        let newest: Vec<String> = keys.iter().rev().take(shrink_to).cloned().collect();
        prop_assert_eq!(&survivors, &newest);

        store.change_capacity(keys.len() * 2);
        prop_assert_eq!(store.keys(), survivors);
        for key in keys.iter().rev().skip(shrink_to) {
            prop_assert!(store.get(key).is_none());
        }
    }
}
