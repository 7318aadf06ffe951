//! Configuration Module
//!
//! Cache construction parameters, embeddable in a host application's config.

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CAPACITY;
use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of simultaneously resident entries
    pub capacity: usize,
}

impl CacheConfig {
    /// Creates a config with the given capacity. Not validated until used.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    // == Validate ==
    /// Checks that the capacity is a positive integer.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfiguration(format!(
                "capacity must be a positive integer, got {}",
                self.capacity
            )));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
