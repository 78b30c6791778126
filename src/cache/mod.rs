//! Cache Module
//!
//! Provides a byte-budgeted in-memory cache with LRU eviction.

mod entry;
mod listener;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use listener::EvictionListener;
pub use stats::CacheStats;
pub use store::Cache;
