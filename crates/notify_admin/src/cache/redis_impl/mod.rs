//! Redis cache backend implementation.
//!
//! Provides a cache shared between processes, with TTL and pattern-based
//! deletion.

mod cache;
mod error;

pub use cache::RedisCache;
