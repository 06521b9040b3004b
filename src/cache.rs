//! TTL memoization cache for derived query results.
//!
//! [`MemoizedCache`] maps opaque string keys to values stamped with their
//! insertion instant. Expiry is lazy: there is no sweeper, and an entry is only
//! discovered to be stale (and evicted) when it is read. An entry is fresh while
//! strictly less than `ttl` has elapsed since it was set.
//!
//! ```
//! use std::time::Duration;
//! use edudesk::cache::MemoizedCache;
//! use edudesk::clock::ManualClock;
//!
//! let clock = ManualClock::new();
//! let mut cache = MemoizedCache::with_clock(Duration::from_secs(60), clock.clone());
//! cache.set("active_items", vec![1u64, 3, 5]);
//!
//! clock.advance(Duration::from_secs(59));
//! assert_eq!(cache.get("active_items"), Some(vec![1, 3, 5]));
//!
//! clock.advance(Duration::from_secs(1));
//! assert_eq!(cache.get("active_items"), None);
//! assert!(cache.is_empty());
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use ahash::AHashMap;
use log::trace;
use serde::Serialize;

use crate::clock::{Clock, SystemClock};

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// Hit/miss counters and current size of a cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of reads that hit, or 0 when nothing was read.
    pub fn hit_rate(&self) -> f64 {
        let reads = self.hits + self.misses;
        if reads == 0 {
            0.0
        } else {
            self.hits as f64 / reads as f64
        }
    }
}

/// Key → value cache with a fixed time-to-live.
#[derive(Debug, Clone)]
pub struct MemoizedCache<V> {
    entries: AHashMap<String, CacheEntry<V>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    hits: u64,
    misses: u64,
}

impl<V: Clone> MemoizedCache<V> {
    /// Create a cache on the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }

    /// Create a cache reading time from `clock`.
    pub fn with_clock<C: Clock + 'static>(ttl: Duration, clock: C) -> Self {
        Self::with_shared_clock(ttl, Arc::new(clock))
    }

    /// Create a cache sharing an existing clock handle.
    pub fn with_shared_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        MemoizedCache {
            entries: AHashMap::new(),
            ttl,
            clock,
            hits: 0,
            misses: 0,
        }
    }

    /// Return a fresh value for `key`, evicting it if it has expired.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let fresh = match self.entries.get(key) {
            Some(entry) => now.saturating_duration_since(entry.inserted_at) < self.ttl,
            None => {
                self.misses += 1;
                trace!("cache miss {key}");
                return None;
            }
        };

        if fresh {
            self.hits += 1;
            trace!("cache hit {key}");
            self.entries.get(key).map(|entry| entry.value.clone())
        } else {
            self.misses += 1;
            trace!("cache entry {key} expired");
            self.entries.remove(key);
            None
        }
    }

    /// Insert or overwrite `key`, stamping the current time.
    pub fn set<K: Into<String>>(&mut self, key: K, value: V) {
        let inserted_at = self.clock.now();
        self.entries
            .insert(key.into(), CacheEntry { value, inserted_at });
    }

    /// Evict everything. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn cache(ttl_secs: u64) -> (MemoizedCache<Vec<u64>>, ManualClock) {
        let clock = ManualClock::new();
        let cache = MemoizedCache::with_clock(Duration::from_secs(ttl_secs), clock.clone());
        (cache, clock)
    }

    #[test]
    fn test_read_before_ttl_hits() {
        let (mut cache, clock) = cache(300);
        cache.set("search:john", vec![1, 6]);
        clock.advance(Duration::from_secs(299));

        assert_eq!(cache.get("search:john"), Some(vec![1, 6]));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_read_after_ttl_evicts_and_set_works_again() {
        let (mut cache, clock) = cache(300);
        cache.set("search:john", vec![1, 6]);
        clock.advance(Duration::from_secs(301));

        assert_eq!(cache.get("search:john"), None);
        assert_eq!(cache.len(), 0);

        cache.set("search:john", vec![6]);
        assert_eq!(cache.get("search:john"), Some(vec![6]));
    }

    #[test]
    fn test_expiry_is_lazy() {
        let (mut cache, clock) = cache(10);
        cache.set("a", vec![1]);
        cache.set("b", vec![2]);
        clock.advance(Duration::from_secs(10));

        // Nothing is evicted until the entry is read.
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_overwrite_restamps() {
        let (mut cache, clock) = cache(10);
        cache.set("k", vec![1]);
        clock.advance(Duration::from_secs(8));
        cache.set("k", vec![2]);
        clock.advance(Duration::from_secs(8));

        assert_eq!(cache.get("k"), Some(vec![2]));
    }

    #[test]
    fn test_clear_and_stats() {
        let (mut cache, _clock) = cache(10);
        cache.set("a", vec![1]);
        assert_eq!(cache.get("a"), Some(vec![1]));
        assert_eq!(cache.get("missing"), None);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get("a"), None);

        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses, stats.entries), (1, 2, 0));
        assert!((stats.hit_rate() - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(cache.ttl(), Duration::from_secs(10));
    }
}
