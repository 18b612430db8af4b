//! Time-bounded memoization for quotes and other derived values
//!
//! The cache is an explicit object owned by whoever injects it. Entries expire
//! after a fixed TTL and are evicted lazily, on the first read past expiry.
//! Every operation has an `_at` variant taking the current instant so tests
//! can drive expiry without sleeping.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;

/// A cached value and the instant it was stored
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// String-keyed cache with a fixed time-to-live
#[derive(Debug, Clone)]
pub struct TtlCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    ttl: Duration,

    /// Statistics
    pub hits: u64,
    pub misses: u64,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            hits: 0,
            misses: 0,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up a live entry, evicting it if it has expired
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    pub fn get_at(&mut self, key: &str, now: Instant) -> Option<V> {
        let expired = match self.entries.get(key) {
            None => {
                self.misses += 1;
                return None;
            }
            Some(entry) => now.saturating_duration_since(entry.stored_at) >= self.ttl,
        };

        if expired {
            self.entries.remove(key);
            self.misses += 1;
            debug!("Cache expired: {}", key);
            return None;
        }

        self.hits += 1;
        debug!("Cache hit: {}", key);
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    pub fn insert_at(&mut self, key: impl Into<String>, value: V, now: Instant) {
        let key = key.into();
        debug!("Cache set: {}", key);
        self.entries.insert(key, CacheEntry { value, stored_at: now });
    }

    /// Drop a single entry
    pub fn invalidate(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    /// Drop every entry whose key contains `pattern`; returns how many went
    pub fn invalidate_matching(&mut self, pattern: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.contains(pattern));
        let removed = before - self.entries.len();
        debug!("Cache cleared: {} ({} entries)", pattern, removed);
        removed
    }

    /// Clear all cached data and statistics
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of stored entries, including expired ones not yet evicted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
