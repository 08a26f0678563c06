//! Cache Statistics Module
//!
//! Tracks lookup and invalidation counters for the prefix cache.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Stats Counters ==
/// Live counters owned by the store.
///
/// Lookups run under a shared read lock, so the counters are atomics
/// rather than plain integers.
#[derive(Debug, Default)]
pub struct StatsCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    prefix_clears: AtomicU64,
    invalidated: AtomicU64,
}

impl StatsCounters {
    // == Constructor ==
    /// Creates a new set of counters, all at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Prefix Clear ==
    /// Records one prefix clear that removed `removed` entries.
    pub fn record_prefix_clear(&self, removed: usize) {
        self.prefix_clears.fetch_add(1, Ordering::Relaxed);
        self.invalidated.fetch_add(removed as u64, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Copies the counters into a serializable snapshot.
    pub fn snapshot(&self, total_entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            prefix_clears: self.prefix_clears.load(Ordering::Relaxed),
            invalidated_entries: self.invalidated.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Cache Stats ==
/// Point-in-time copy of the cache counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of successful lookups
    pub hits: u64,
    /// Number of lookups for absent keys
    pub misses: u64,
    /// Number of prefix clears performed, including ones that matched nothing
    pub prefix_clears: u64,
    /// Total entries removed by prefix clears
    pub invalidated_entries: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
