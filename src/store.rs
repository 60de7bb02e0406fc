//! Ephemeral append-only store.
//!
//! An in-memory, per-instance, insertion-ordered sequence of records with
//! copy-on-read. The store treats records as opaque: no validation, no
//! interpretation. It has a single degenerate state (open, accepting
//! appends) for its entire lifetime and is dropped with its owner.

use tracing::debug;

/// An append-only record sequence with deep-copied reads.
///
/// Each instance exclusively owns its backing storage; two stores never
/// observe each other's appends. [`EphemeralStore::get_all`] hands back a
/// freshly allocated clone of the sequence, so mutating the returned copy
/// never affects the store, and later appends never affect earlier copies.
#[derive(Debug, Clone, Default)]
pub struct EphemeralStore<T> {
    records: Vec<T>,
}

impl<T: Clone> EphemeralStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Append a record. Never fails; the record is not inspected.
    pub fn put(&mut self, record: T) {
        self.records.push(record);
        debug!(len = self.records.len(), "record appended");
    }

    /// All records in insertion order, as an independently owned copy.
    pub fn get_all(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store: EphemeralStore<String> = EphemeralStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn put_appends_in_insertion_order() {
        let mut store = EphemeralStore::new();
        for record in ["a1", "a2", "a3", "a4"] {
            store.put(record.to_string());
        }
        assert_eq!(store.get_all(), vec!["a1", "a2", "a3", "a4"]);
    }

    #[test]
    fn get_all_returns_an_independent_copy() {
        let mut store = EphemeralStore::new();
        store.put("hello".to_string());
        store.put("world".to_string());

        let mut copy = store.get_all();
        copy.push("!!!!!!".to_string());

        assert_eq!(store.get_all(), vec!["hello", "world"]);
    }

    #[test]
    fn later_puts_do_not_affect_earlier_copies() {
        let mut store = EphemeralStore::new();
        store.put(1);
        let before = store.get_all();
        store.put(2);

        assert_eq!(before, vec![1]);
        assert_eq!(store.get_all(), vec![1, 2]);
    }

    #[test]
    fn instances_are_isolated() {
        let mut store1 = EphemeralStore::new();
        let store2: EphemeralStore<&str> = EphemeralStore::new();
        store1.put("testing");

        assert_eq!(store1.len(), 1);
        assert_eq!(store2.len(), 0);
    }
}
