//! In-memory cache backend implementation.
//!
//! Provides a thread-safe in-memory cache with TTL support for
//! single-process use.

mod cache;

pub use cache::MemoryCache;
