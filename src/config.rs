//! Configuration Module
//!
//! Handles loading the cache budget from environment variables.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CacheError, Result};

/// Environment variable holding the byte budget.
pub const MAX_BYTES_VAR: &str = "BYTECACHE_MAX_BYTES";

/// Cache configuration parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Byte budget over all keys and values, 0 = unbounded
    #[serde(default)]
    pub max_bytes: usize,
}

impl CacheConfig {
    /// Creates a config with the given byte budget.
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `BYTECACHE_MAX_BYTES` - Byte budget (default: 0, unbounded)
    ///
    /// Unset variables fall back to defaults; set but unparseable ones are
    /// reported as [`CacheError::InvalidConfig`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`CacheConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_BYTES_VAR) {
            config.max_bytes =
                raw.trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| CacheError::InvalidConfig {
                        var: MAX_BYTES_VAR.to_string(),
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
        }

        debug!(max_bytes = config.max_bytes, "cache config loaded");
        Ok(config)
    }

    /// Returns true if no byte budget is enforced.
    pub fn is_unbounded(&self) -> bool {
        self.max_bytes == 0
    }
}
