use std::{env, time::Duration};

use notify_admin_client::CacheTtls;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote API (no default)
    pub api_url: Option<String>,
    /// Bearer token sent with every API request (no default)
    pub api_token: Option<String>,
    /// TTL for slow-changing resources in seconds (default: 604,800 = 7 days)
    pub cache_ttl_seconds: u64,
    /// TTL for aggregate and report data in seconds (default: 3,600 = 1 hour)
    pub cache_short_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `NOTIFY_API_URL` - Remote API base URL
    /// - `NOTIFY_API_TOKEN` - Remote API bearer token
    /// - `CACHE_TTL_SECONDS` - Long cache TTL in seconds (default: 604,800)
    /// - `CACHE_SHORT_TTL_SECONDS` - Short cache TTL in seconds (default: 3,600)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> Self {
        Self {
            api_url: non_empty_var("NOTIFY_API_URL"),
            api_token: non_empty_var("NOTIFY_API_TOKEN"),
            cache_ttl_seconds: parsed_var("CACHE_TTL_SECONDS")
                .unwrap_or(CacheTtls::DEFAULT_LONG.as_secs()),
            cache_short_ttl_seconds: parsed_var("CACHE_SHORT_TTL_SECONDS")
                .unwrap_or(CacheTtls::DEFAULT_SHORT.as_secs()),
            cache_max_entries: parsed_var("CACHE_MAX_ENTRIES")
                .filter(|entries| *entries > 0)
                .unwrap_or(10_000),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get the cache TTLs as Durations.
    pub fn cache_ttls(&self) -> CacheTtls {
        CacheTtls::new(
            Duration::from_secs(self.cache_ttl_seconds),
            Duration::from_secs(self.cache_short_ttl_seconds),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
