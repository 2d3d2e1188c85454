//! Cache Entry Module
//!
//! Defines the key/value pair held by each node of the recency list.

// == Cache Entry ==
/// A single cache entry: the key it is indexed under and its payload.
///
/// Every entry is owned by exactly one node of the recency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    /// The key the entry is indexed under
    pub key: String,
    /// The stored value
    pub value: V,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates a new entry from a key and a value.
    pub fn new(key: String, value: V) -> Self {
        Self { key, value }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = Entry::new("first".to_string(), 1);

        assert_eq!(entry.key, "first");
        assert_eq!(entry.value, 1);
    }
}
