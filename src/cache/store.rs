//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with an arena-backed recency
//! list and byte accounting.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::cache::entry::Entry;
use crate::cache::lru::{RecencyList, SlotId};
use crate::cache::{CacheStats, EvictionListener};
use crate::config::CacheConfig;

// == Cache ==
/// Byte-budgeted LRU cache.
///
/// Every entry is charged `key.len() + value.len()` bytes. After each
/// [`add`](Cache::add) the least recently used entries are evicted until the
/// total fits in `max_bytes`. A budget of 0 disables eviction.
///
/// The cache is not synchronized; wrap it in a lock to share it between
/// threads.
pub struct Cache {
    /// Key to handle of the entry's node in `order`
    index: HashMap<String, SlotId>,
    /// Entries from most to least recently used
    order: RecencyList<Entry>,
    /// Byte budget, 0 = unbounded
    max_bytes: usize,
    /// Sum of the charges of all live entries
    current_bytes: usize,
    /// Usage counters
    stats: CacheStats,
    /// Called once per evicted entry
    on_evicted: Option<Box<dyn EvictionListener + Send>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache with the given byte budget and no listener.
    ///
    /// A budget of 0 disables eviction. The budget is unsigned, so 0 is the
    /// only non-positive value and there is no negative "evict everything"
    /// budget; use 1 for the smallest enforced budget.
    pub fn new(max_bytes: usize) -> Self {
        Self {
            index: HashMap::new(),
            order: RecencyList::new(),
            max_bytes,
            current_bytes: 0,
            stats: CacheStats::new(),
            on_evicted: None,
        }
    }

    /// Creates an empty cache that reports evictions to `listener`.
    pub fn with_on_evicted<L>(max_bytes: usize, listener: L) -> Self
    where
        L: EvictionListener + Send + 'static,
    {
        let mut cache = Self::new(max_bytes);
        cache.set_on_evicted(listener);
        cache
    }

    /// Creates an empty cache from a loaded [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_bytes)
    }

    // == Eviction Listener ==
    /// Installs `listener`, replacing any previous one.
    pub fn set_on_evicted<L>(&mut self, listener: L)
    where
        L: EvictionListener + Send + 'static,
    {
        self.on_evicted = Some(Box::new(listener));
    }

    /// Removes the eviction listener.
    pub fn clear_on_evicted(&mut self) {
        self.on_evicted = None;
    }

    // == Get ==
    /// Looks up a key and marks it as most recently used.
    ///
    /// Returns None on a miss; a miss changes nothing but the miss counter.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        let Some(&id) = self.index.get(key) else {
            self.stats.record_miss();
            trace!(key, "cache miss");
            return None;
        };

        self.stats.record_hit();
        trace!(key, "cache hit");
        self.order.move_to_front(id);
        self.order.get(id).map(|entry| entry.value.as_str())
    }

    // == Add ==
    /// Inserts or updates a key, then evicts until the budget is met.
    ///
    /// An existing key keeps its handle; its value is replaced and it becomes
    /// most recently used. An entry larger than the whole budget is inserted
    /// and then evicted again by the same call, after everything else.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        let charge = match self.index.get(&key) {
            Some(&id) => {
                let mut charge = 0;
                if let Some(entry) = self.order.get_mut(id) {
                    let old = entry.replace_value(value);
                    self.current_bytes = self.current_bytes - old.len() + entry.value.len();
                    charge = entry.charge();
                    trace!(key = %entry.key, old_len = old.len(), new_len = entry.value.len(), "cache update");
                }
                self.order.move_to_front(id);
                charge
            }
            None => {
                let entry = Entry::new(key.clone(), value);
                let charge = entry.charge();
                trace!(key = %key, charge, "cache insert");
                self.current_bytes += charge;
                let id = self.order.push_front(entry);
                self.index.insert(key, id);
                charge
            }
        };

        if self.max_bytes != 0 && charge > self.max_bytes {
            debug!(
                charge,
                max_bytes = self.max_bytes,
                "entry exceeds the byte budget on its own"
            );
        }

        while self.is_over_budget() && self.evict_oldest() {}
    }

    // == Remove Oldest ==
    /// Evicts the least recently used entry, if any.
    ///
    /// The listener runs after the entry is gone from the index, the recency
    /// list, and the byte count. No-op on an empty cache.
    pub fn remove_oldest(&mut self) {
        self.evict_oldest();
    }

    fn evict_oldest(&mut self) -> bool {
        let Some(entry) = self.order.pop_back() else {
            return false;
        };
        self.index.remove(&entry.key);
        let freed = entry.charge();
        self.current_bytes -= freed;
        self.stats.record_eviction();

        debug!(
            key = %entry.key,
            freed,
            remaining = self.current_bytes,
            "evicted least recently used entry"
        );

        if let Some(listener) = self.on_evicted.as_mut() {
            listener.on_evicted(entry.key, entry.value);
        }
        true
    }

    fn is_over_budget(&self) -> bool {
        self.max_bytes != 0 && self.current_bytes > self.max_bytes
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Byte Accounting ==
    /// Bytes currently charged against the budget.
    pub fn current_bytes(&self) -> usize {
        self.current_bytes
    }

    /// The configured byte budget, 0 = unbounded.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    // == Inspection ==
    /// Checks membership without touching recency or statistics.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Looks up a value without touching recency or statistics.
    pub fn peek(&self, key: &str) -> Option<&str> {
        let id = *self.index.get(key)?;
        self.order.get(id).map(|entry| entry.value.as_str())
    }

    /// Returns the entry that the next eviction would remove.
    pub fn peek_oldest(&self) -> Option<(&str, &str)> {
        self.order
            .back()
            .map(|entry| (entry.key.as_str(), entry.value.as_str()))
    }

    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order
            .iter()
            .map(|entry| (entry.key.as_str(), entry.value.as_str()))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_occupancy(self.len(), self.current_bytes);
        stats
    }

    /// Panics if the index, the recency list, and the byte count disagree.
    #[cfg(test)]
    pub(crate) fn debug_validate_invariants(&self) {
        self.order.debug_validate_invariants();
        assert_eq!(self.index.len(), self.order.len());

        for (key, &id) in &self.index {
            let entry = self.order.get(id).expect("index points at a dead slot");
            assert_eq!(&entry.key, key);
        }

        let total: usize = self.order.iter().map(Entry::charge).sum();
        assert_eq!(self.current_bytes, total);
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("len", &self.len())
            .field("max_bytes", &self.max_bytes)
            .field("current_bytes", &self.current_bytes)
            .field("stats", &self.stats)
            .field("on_evicted", &self.on_evicted.is_some())
            .finish()
    }
}
