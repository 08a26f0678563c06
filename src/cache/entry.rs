//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// Represents a single cache entry: an opaque value and the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value, owned exclusively by the cache
    pub value: V,
    /// When the value was last written
    pub stored_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: V) -> Self {
        Self {
            value,
            stored_at: Utc::now(),
        }
    }

    // == Replace ==
    /// Overwrites the value in place and refreshes `stored_at`.
    ///
    /// Returns the previous value.
    pub fn replace(&mut self, value: V) -> V {
        self.stored_at = Utc::now();
        std::mem::replace(&mut self.value, value)
    }

    /// Consumes the entry and returns its value.
    pub fn into_value(self) -> V {
        self.value
    }
}
