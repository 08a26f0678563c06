//! Prefix Cache Store
//!
//! Main cache engine combining HashMap storage with insertion-order
//! tracking and snapshot-based prefix invalidation.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheStats, InsertionOrder, StatsCounters};
use crate::error::{CacheError, Result};

// == Prefix Cache ==
/// In-memory key/value store with bulk removal by key prefix.
///
/// The store itself is not synchronized. Share it behind a single
/// lock (see [`crate::api::AppState`]) so that every mutation, and in
/// particular every prefix clear, runs exclusively.
#[derive(Debug)]
pub struct PrefixCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// First-insertion order of keys
    order: InsertionOrder,
    /// Lookup and invalidation counters
    stats: StatsCounters,
}

impl<V> Default for PrefixCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PrefixCache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: StatsCounters::new(),
        }
    }

    // == Put ==
    /// Stores a value, overwriting any previous value under the same key.
    ///
    /// An overwritten key keeps its original insertion position. The only
    /// key constraint is that it is non-empty.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(CacheError::InvalidRequest(
                "Key cannot be empty".to_string(),
            ));
        }

        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().replace(value);
            }
            Entry::Vacant(vacant) => {
                self.order.push(vacant.key());
                vacant.insert(CacheEntry::new(value));
            }
        }

        Ok(())
    }

    // == Get ==
    /// Returns the current value for `key`.
    pub fn get(&self, key: &str) -> Result<&V> {
        self.entry(key).map(|entry| &entry.value)
    }

    // == Entry ==
    /// Returns the value for `key` together with its metadata.
    pub fn entry(&self, key: &str) -> Result<&CacheEntry<V>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Ok(entry)
            }
            None => {
                self.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }

    // == Contains Key ==
    /// Returns true if `key` is present. Does not touch hit/miss counters.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Delete ==
    /// Removes a single entry and returns its value.
    pub fn delete(&mut self, key: &str) -> Result<V> {
        match self.entries.remove(key) {
            Some(entry) => {
                self.order.remove(key);
                Ok(entry.into_value())
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Clear Prefix ==
    /// Removes every entry whose key starts with `prefix` and returns how
    /// many were removed.
    ///
    /// The match is a literal prefix test on the key, not a pattern.
    ///
    /// # Empty prefix
    ///
    /// **An empty `prefix` matches every key and empties the whole cache.**
    /// This is deliberate and is logged at `warn` level each time. Callers
    /// that build prefixes from user input must reject empty strings
    /// themselves if a full clear is not what they want.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_cache::cache::PrefixCache;
    ///
    /// let mut cache = PrefixCache::new();
    /// cache.put("/a/1", "x").unwrap();
    /// cache.put("/a/2", "y").unwrap();
    /// cache.put("/b/1", "z").unwrap();
    ///
    /// assert_eq!(cache.clear_prefix("/a/"), 2);
    /// assert!(cache.get("/a/1").is_err());
    /// assert_eq!(cache.get("/b/1").unwrap(), &"z");
    /// assert_eq!(cache.clear_prefix("/a/"), 0);
    /// ```
    pub fn clear_prefix(&mut self, prefix: &str) -> usize {
        self.drain_prefix(prefix).len()
    }

    // == Drain Prefix ==
    /// Removes every entry whose key starts with `prefix` and returns the
    /// removed pairs, oldest first.
    ///
    /// The set of matching keys is computed once, up front; exactly that
    /// set is then removed. Same empty-prefix semantics as
    /// [`clear_prefix`](Self::clear_prefix).
    pub fn drain_prefix(&mut self, prefix: &str) -> Vec<(String, V)> {
        let snapshot = self.order.matching(prefix);

        if prefix.is_empty() {
            warn!(
                count = snapshot.len(),
                "Empty prefix: clearing every cache entry"
            );
        }

        let removed: Vec<(String, V)> = snapshot
            .into_iter()
            .filter_map(|key| {
                let entry = self.entries.remove(&key)?;
                Some((key, entry.into_value()))
            })
            .collect();

        let doomed: HashSet<&str> = removed.iter().map(|(key, _)| key.as_str()).collect();
        self.order.remove_all(&doomed);

        self.stats.record_prefix_clear(removed.len());
        debug!(prefix = %prefix, removed = removed.len(), "Prefix cleared");

        removed
    }

    // == Keys With Prefix ==
    /// Lists keys starting with `prefix`, oldest first, without removing them.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.order.matching(prefix)
    }

    // == Keys ==
    /// Iterates all keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, RwLock};
    use std::thread;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Counts `warn`-level events seen while installed.
    #[derive(Clone, Default)]
    struct WarnCounter(Arc<AtomicUsize>);

    impl WarnCounter {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn scenario_cache() -> PrefixCache<String> {
        let mut cache = PrefixCache::new();
        cache.put("/a/1", "x".to_string()).unwrap();
        cache.put("/a/2", "y".to_string()).unwrap();
        cache.put("/b/1", "z".to_string()).unwrap();
        cache
    }

    #[test]
    fn test_cache_new() {
        let cache: PrefixCache<String> = PrefixCache::new();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_and_get() {
        let mut cache = PrefixCache::new();

        cache.put("key1", "value1".to_string()).unwrap();

        assert_eq!(cache.get("key1").unwrap(), "value1");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_nonexistent() {
        let cache: PrefixCache<String> = PrefixCache::new();

        let result = cache.get("nonexistent");
        assert_eq!(result, Err(CacheError::NotFound("nonexistent".to_string())));
    }

    #[test]
    fn test_put_empty_key_rejected() {
        let mut cache = PrefixCache::new();

        let result = cache.put("", 1u8);
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut cache = PrefixCache::new();

        cache.put("first", 1).unwrap();
        cache.put("second", 2).unwrap();
        cache.put("first", 3).unwrap();

        assert_eq!(cache.get("first").unwrap(), &3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.keys().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_entry_exposes_timestamp() {
        let mut cache = PrefixCache::new();
        cache.put("/a/1", "x".to_string()).unwrap();

        let entry = cache.entry("/a/1").unwrap();
        assert_eq!(entry.value, "x");
        assert!(entry.stored_at <= chrono::Utc::now());
    }

    #[test]
    fn test_delete() {
        let mut cache = scenario_cache();

        let removed = cache.delete("/a/1").unwrap();

        assert_eq!(removed, "x");
        assert!(!cache.contains_key("/a/1"));
        assert_eq!(cache.keys().collect::<Vec<_>>(), vec!["/a/2", "/b/1"]);
    }

    #[test]
    fn test_delete_nonexistent() {
        let mut cache: PrefixCache<String> = PrefixCache::new();

        let result = cache.delete("nonexistent");
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[test]
    fn test_clear_prefix_scenario() {
        let mut cache = scenario_cache();

        assert_eq!(cache.clear_prefix("/a/"), 2);
        assert!(matches!(cache.get("/a/1"), Err(CacheError::NotFound(_))));
        assert!(matches!(cache.get("/a/2"), Err(CacheError::NotFound(_))));
        assert_eq!(cache.get("/b/1").unwrap(), "z");
    }

    #[test]
    fn test_clear_prefix_on_empty_cache() {
        let mut cache: PrefixCache<String> = PrefixCache::new();
        assert_eq!(cache.clear_prefix("/a/"), 0);
    }

    #[test]
    fn test_clear_prefix_no_match_leaves_cache_unchanged() {
        let mut cache = scenario_cache();

        assert_eq!(cache.clear_prefix("/c/"), 0);
        assert_eq!(cache.len(), 3);
        assert_eq!(
            cache.keys().collect::<Vec<_>>(),
            vec!["/a/1", "/a/2", "/b/1"]
        );
    }

    #[test]
    fn test_clear_prefix_is_idempotent() {
        let mut cache = scenario_cache();

        assert_eq!(cache.clear_prefix("/a/"), 2);
        assert_eq!(cache.clear_prefix("/a/"), 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_empty_prefix_removes_everything() {
        let mut cache = scenario_cache();

        assert_eq!(cache.clear_prefix(""), 3);
        assert!(cache.is_empty());
        assert_eq!(cache.keys().count(), 0);
    }

    #[test]
    fn test_empty_prefix_warns_on_every_full_clear() {
        let counter = WarnCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());

        tracing::subscriber::with_default(subscriber, || {
            let mut cache = scenario_cache();

            cache.clear_prefix("/a/");
            assert_eq!(counter.count(), 0);

            assert_eq!(cache.clear_prefix(""), 1);
            assert_eq!(counter.count(), 1);

            // An already-empty cache still warns
            assert_eq!(cache.clear_prefix(""), 0);
            assert_eq!(counter.count(), 2);
        });
    }

    #[test]
    fn test_clear_prefix_is_literal() {
        let mut cache = PrefixCache::new();
        cache.put("/a.*/1", 1).unwrap();
        cache.put("/ab/1", 2).unwrap();

        assert_eq!(cache.clear_prefix("/a.*"), 1);
        assert!(cache.contains_key("/ab/1"));
    }

    #[test]
    fn test_clear_prefix_respects_directory_boundary() {
        let mut cache = PrefixCache::new();
        cache.put("/srv/site/index.php", 1).unwrap();
        cache.put("/srv/site/lib/a.php", 2).unwrap();
        cache.put("/srv/site2/index.php", 3).unwrap();

        assert_eq!(cache.clear_prefix("/srv/site/"), 2);
        assert!(cache.contains_key("/srv/site2/index.php"));
    }

    #[test]
    fn test_drain_prefix_returns_entries_in_insertion_order() {
        let mut cache = PrefixCache::new();
        cache.put("/a/2", "second").unwrap();
        cache.put("/b/1", "other").unwrap();
        cache.put("/a/1", "first").unwrap();

        let drained = cache.drain_prefix("/a/");

        assert_eq!(
            drained,
            vec![
                ("/a/2".to_string(), "second"),
                ("/a/1".to_string(), "first")
            ]
        );
        assert_eq!(cache.keys().collect::<Vec<_>>(), vec!["/b/1"]);
    }

    #[test]
    fn test_keys_with_prefix_does_not_remove() {
        let cache = scenario_cache();

        assert_eq!(cache.keys_with_prefix("/a/"), vec!["/a/1", "/a/2"]);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_stats() {
        let mut cache = scenario_cache();

        cache.get("/a/1").unwrap(); // hit
        let _ = cache.get("nonexistent"); // miss
        cache.clear_prefix("/a/");
        cache.clear_prefix("/zzz/");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.prefix_clears, 2);
        assert_eq!(stats.invalidated_entries, 2);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_concurrent_puts_are_never_lost_by_clear() {
        const WRITERS: usize = 4;
        const PER_WRITER: usize = 200;

        let cache = Arc::new(RwLock::new(PrefixCache::new()));

        let writers: Vec<_> = (0..WRITERS)
            .map(|w| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..PER_WRITER {
                        cache
                            .write()
                            .unwrap()
                            .put(format!("/hot/{}/{}", w, i), i)
                            .unwrap();
                    }
                })
            })
            .collect();

        let mut drained = Vec::new();
        for _ in 0..50 {
            let batch = cache.write().unwrap().drain_prefix("/hot/");
            drained.extend(batch.into_iter().map(|(key, _)| key));
            thread::yield_now();
        }

        for writer in writers {
            writer.join().unwrap();
        }

        let remaining = cache.read().unwrap().keys_with_prefix("/hot/");

        // Every key ends up either drained exactly once or still present.
        let mut seen: HashSet<String> = HashSet::new();
        for key in drained.iter().chain(remaining.iter()) {
            assert!(seen.insert(key.clone()), "key {} seen twice", key);
        }
        assert_eq!(seen.len(), WRITERS * PER_WRITER);
    }
}
