//! Mini LRU - A fixed-capacity, thread-safe in-memory cache
//!
//! Keys are strings, values are any payload type. When the cache is full the
//! least recently used entry is evicted to make room.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheStats, CacheStore};
pub use config::Config;
pub use error::{CacheError, Result};
