//! Map of FIFO queues.
//!
//! The correlation primitive used by both the transport (pending requests
//! per channel) and the device controller (business transactions per device).
//!
//! A key whose queue becomes empty is removed immediately, so "empty" and
//! "absent" are the same state to callers.

// ============================================================================
// Imports
// ============================================================================

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashMap;

// ============================================================================
// MapOfQueue
// ============================================================================

/// FIFO queues keyed by `K`.
#[derive(Debug)]
pub struct MapOfQueue<K, V> {
    queues: FxHashMap<K, VecDeque<V>>,
}

impl<K, V> Default for MapOfQueue<K, V> {
    fn default() -> Self {
        Self {
            queues: FxHashMap::default(),
        }
    }
}

impl<K: Eq + Hash + Copy, V> MapOfQueue<K, V> {
    /// Creates an empty map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the back of the queue for `key`.
    pub fn push(&mut self, key: K, value: V) {
        self.queues.entry(key).or_default().push_back(value);
    }

    /// Puts `value` back at the head of the queue for `key`.
    ///
    /// Used when a multi-stage record must stay the oldest waiter.
    pub fn push_front(&mut self, key: K, value: V) {
        self.queues.entry(key).or_default().push_front(value);
    }

    /// Pops the oldest value for `key`.
    pub fn front(&mut self, key: K) -> Option<V> {
        let queue = self.queues.get_mut(&key)?;
        let value = queue.pop_front();
        if queue.is_empty() {
            self.queues.remove(&key);
        }
        value
    }

    /// Peeks the oldest value for `key` without removing it.
    #[must_use]
    pub fn get(&self, key: K) -> Option<&V> {
        self.queues.get(&key).and_then(VecDeque::front)
    }

    /// Mutable peek at the oldest value for `key`.
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.queues.get_mut(&key).and_then(VecDeque::front_mut)
    }

    /// Returns `true` if nothing is queued for `key`.
    #[must_use]
    pub fn is_empty(&self, key: K) -> bool {
        !self.queues.contains_key(&key)
    }

    /// Number of values queued for `key`.
    #[must_use]
    pub fn len(&self, key: K) -> usize {
        self.queues.get(&key).map_or(0, VecDeque::len)
    }

    /// Removes and returns every value queued for `key`, oldest first.
    pub fn delete(&mut self, key: K) -> Vec<V> {
        self.queues
            .remove(&key)
            .map(Vec::from)
            .unwrap_or_default()
    }

    /// Removes every queue.
    pub fn clear(&mut self) {
        self.queues.clear();
    }

    /// Removes and returns every queued value for every key.
    pub fn drain(&mut self) -> Vec<(K, V)> {
        self.queues
            .drain()
            .flat_map(|(key, queue)| queue.into_iter().map(move |value| (key, value)))
            .collect()
    }

    /// Keys with at least one queued value.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.queues.keys().copied()
    }

    /// Total number of queued values.
    #[must_use]
    pub fn total(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_single_push_drains_key() {
        let mut map = MapOfQueue::new();
        map.push(1u32, "a");
        assert!(!map.is_empty(1));
        assert_eq!(map.front(1), Some("a"));
        assert!(map.is_empty(1));
        assert_eq!(map.keys().count(), 0);
    }

    #[test]
    fn test_front_on_missing_key() {
        let mut map: MapOfQueue<u32, u8> = MapOfQueue::new();
        assert_eq!(map.front(9), None);
        assert_eq!(map.get(9), None);
        assert!(map.delete(9).is_empty());
    }

    #[test]
    fn test_get_does_not_remove() {
        let mut map = MapOfQueue::new();
        map.push(2u32, 10);
        map.push(2, 20);
        assert_eq!(map.get(2), Some(&10));
        assert_eq!(map.len(2), 2);
        if let Some(v) = map.get_mut(2) {
            *v = 11;
        }
        assert_eq!(map.front(2), Some(11));
    }

    #[test]
    fn test_push_front_keeps_head() {
        let mut map = MapOfQueue::new();
        map.push(0u32, 'b');
        map.push_front(0, 'a');
        assert_eq!(map.front(0), Some('a'));
        assert_eq!(map.front(0), Some('b'));
    }

    #[test]
    fn test_delete_and_clear() {
        let mut map = MapOfQueue::new();
        map.push(1u32, 1);
        map.push(1, 2);
        map.push(3, 3);
        assert_eq!(map.delete(1), vec![1, 2]);
        assert!(map.is_empty(1));
        assert_eq!(map.total(), 1);
        map.clear();
        assert!(map.is_empty(3));
    }

    #[test]
    fn test_drain_returns_everything() {
        let mut map = MapOfQueue::new();
        map.push(1u32, 'a');
        map.push(2, 'b');
        map.push(2, 'c');
        let mut drained = map.drain();
        drained.sort();
        assert_eq!(drained, vec![(1, 'a'), (2, 'b'), (2, 'c')]);
        assert_eq!(map.total(), 0);
    }

    proptest! {
        #[test]
        fn prop_fifo_per_key(ops in proptest::collection::vec((0u32..4, any::<u16>()), 0..64)) {
            let mut map = MapOfQueue::new();
            for (key, value) in &ops {
                map.push(*key, *value);
            }
            for key in 0u32..4 {
                let expected: Vec<u16> = ops
                    .iter()
                    .filter(|(k, _)| *k == key)
                    .map(|(_, v)| *v)
                    .collect();
                let mut actual = Vec::new();
                while let Some(v) = map.front(key) {
                    actual.push(v);
                }
                prop_assert_eq!(actual, expected);
                prop_assert!(map.is_empty(key));
            }
            prop_assert_eq!(map.keys().count(), 0);
        }

        #[test]
        fn prop_push_front_on_fresh_key(key in any::<u32>(), value in any::<i64>()) {
            let mut map = MapOfQueue::new();
            map.push(key, value);
            prop_assert_eq!(map.front(key), Some(value));
            prop_assert!(map.is_empty(key));
            prop_assert_eq!(map.keys().count(), 0);
        }
    }
}
