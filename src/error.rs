//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity was not a positive integer
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Key is not resident (never inserted, or evicted)
    #[error("Cache miss")]
    CacheMiss,
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
