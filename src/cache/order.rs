//! Write Order Tracker Module
//!
//! Tracks the order in which keys were written, for oldest-write-first
//! eviction. Reads do not reorder anything: this is a capacity bound, not
//! an LRU.

use std::collections::VecDeque;

// == Write Order Tracker ==
/// Tracks key write order.
///
/// Keys are stored in a VecDeque where:
/// - Front = oldest write
/// - Back = newest write
#[derive(Debug, Default)]
pub struct WriteOrder {
    /// Keys ordered by write time
    order: VecDeque<String>,
}

impl WriteOrder {
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record ==
    /// Records a write to a key, moving it to the back (newest).
    ///
    /// An overwritten key counts as freshly written.
    pub fn record(&mut self, key: &str) {
        self.remove(key);
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker; no-op if absent.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Oldest ==
    /// Returns and removes the oldest-written key, or None when empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    /// Returns the oldest-written key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    /// Drops all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let mut order = WriteOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_record_preserves_write_order() {
        let mut order = WriteOrder::new();
        order.record("a");
        order.record("b");
        order.record("c");

        assert_eq!(order.peek_oldest(), Some(&"a".to_string()));
        assert_eq!(order.pop_oldest(), Some("a".to_string()));
        assert_eq!(order.pop_oldest(), Some("b".to_string()));
        assert_eq!(order.pop_oldest(), Some("c".to_string()));
    }

    #[test]
    fn test_overwrite_moves_to_newest() {
        let mut order = WriteOrder::new();
        order.record("a");
        order.record("b");
        order.record("a");

        assert_eq!(order.len(), 2);
        assert_eq!(order.pop_oldest(), Some("b".to_string()));
        assert_eq!(order.pop_oldest(), Some("a".to_string()));
    }

    #[test]
    fn test_remove() {
        let mut order = WriteOrder::new();
        order.record("a");
        order.record("b");
        order.remove("a");

        assert_eq!(order.len(), 1);
        assert_eq!(order.peek_oldest(), Some(&"b".to_string()));
    }

    #[test]
    fn test_remove_nonexistent_is_noop() {
        let mut order = WriteOrder::new();
        order.record("a");
        order.remove("missing");
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut order = WriteOrder::new();
        order.record("a");
        order.record("b");
        order.clear();
        assert!(order.is_empty());
    }
}
