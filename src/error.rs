//! Error types for the cache crate
//!
//! Cache operations themselves never fail; errors only come from the
//! configuration layer.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A configuration variable is set but holds an unusable value
    #[error("Invalid config: {var}={value:?} ({reason})")]
    InvalidConfig {
        var: String,
        value: String,
        reason: String,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;
