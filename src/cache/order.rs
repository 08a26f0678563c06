//! Insertion Order Module
//!
//! Tracks the order in which keys were first inserted into the cache.

use std::collections::{HashSet, VecDeque};

// == Insertion Order ==
/// Tracks first-insertion order of cache keys.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest key
/// - Back = Newest key
///
/// Overwriting an existing key does not move it.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Keys in the order they were first inserted
    order: VecDeque<String>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Push ==
    /// Appends a newly inserted key.
    ///
    /// The caller guarantees the key is not already tracked.
    pub fn push(&mut self, key: &str) {
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a single key from the tracker.
    pub fn remove(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }

    // == Matching ==
    /// Returns every tracked key starting with `prefix`, oldest first.
    pub fn matching(&self, prefix: &str) -> Vec<String> {
        self.order
            .iter()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect()
    }

    // == Remove All ==
    /// Removes exactly the given set of keys in a single pass.
    pub fn remove_all(&mut self, keys: &HashSet<&str>) {
        self.order.retain(|k| !keys.contains(k.as_str()));
    }

    // == Iter ==
    /// Iterates keys oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    /// Returns true if no keys are tracked.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
