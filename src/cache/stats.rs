//! Cache Statistics Module
//!
//! Tracks cache usage counters: hits, misses, evictions, and occupancy.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache usage counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of lookups that found their key
    pub hits: u64,
    /// Number of lookups that did not find their key
    pub misses: u64,
    /// Number of entries removed as least recently used
    pub evictions: u64,
    /// Current number of entries in the cache
    pub entries: usize,
    /// Current bytes charged against the budget
    pub bytes: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

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

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Occupancy ==
    /// Fills in the live entry count and byte total.
    pub fn set_occupancy(&mut self, entries: usize, bytes: usize) {
        self.entries = entries;
        self.bytes = bytes;
    }
}
