//! Bytecache - A byte-budgeted in-memory LRU cache
//!
//! Provides a single-threaded key/value cache that evicts the least recently
//! used entry once the total size of keys and values exceeds a byte budget.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheStats, EvictionListener};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
