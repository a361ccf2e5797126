//! Cache backend implementations.
//!
//! Concrete implementations of the `notify_admin_core::cache::Cache` trait.
//! The backend is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-memory LRU cache, private to the process
//! - `redis`: Redis cache shared by every process pointing at the same server
//!
//! These features are mutually exclusive - only one cache backend can be
//! enabled at a time.

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p notify_admin --no-default-features --features redis"
);

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

use std::sync::Arc;

use notify_admin_core::cache::Cache;

use crate::config::Config;

/// Build the cache backend selected at compile time.
#[cfg(feature = "memory")]
pub async fn build_cache(config: &Config) -> anyhow::Result<Arc<dyn Cache>> {
    tracing::debug!(max_entries = config.cache_max_entries, "Using in-memory cache");
    Ok(Arc::new(memory::MemoryCache::new(config.cache_max_entries)))
}

/// Build the cache backend selected at compile time.
#[cfg(feature = "redis")]
pub async fn build_cache(config: &Config) -> anyhow::Result<Arc<dyn Cache>> {
    tracing::debug!(url = %config.redis_url, "Connecting to Redis cache");
    let cache = redis_impl::RedisCache::new(&config.redis_url).await?;
    Ok(Arc::new(cache))
}
