//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// Misses and duplicate inserts are not errors; they are reported through
/// `bool` and `Option` return values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Requested capacity is below one
    #[error("Invalid capacity: {0} (capacity of the cache can not be less than 1)")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
