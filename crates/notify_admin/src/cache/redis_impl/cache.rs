//! Redis cache implementation.
//!
//! Pattern deletion runs as a single Lua script so the scan and the deletes
//! happen atomically on the server. No other client can write a matching key
//! between the two.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use notify_admin_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Walks the keyspace with SCAN and deletes every key matching `ARGV[1]`.
/// Returns the number of keys deleted.
const DELETE_PATTERN_SCRIPT: &str = r#"
local cursor = "0"
local removed = 0
repeat
    local reply = redis.call("SCAN", cursor, "MATCH", ARGV[1], "COUNT", 1000)
    cursor = reply[1]
    for _, key in ipairs(reply[2]) do
        removed = removed + redis.call("DEL", key)
    end
until cursor == "0"
return removed
"#;

/// Redis cache backend using connection manager for pooling.
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
    delete_pattern_script: redis::Script,
}

impl RedisCache {
    /// Creates a new Redis cache connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self {
            conn,
            delete_pattern_script: redis::Script::new(DELETE_PATTERN_SCRIPT),
        })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.conn.clone();

        match ttl {
            Some(duration) => {
                let seconds = duration.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, seconds)
                    .await
                    .map_err(map_redis_error)?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(map_redis_error)?;
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<usize> {
        let mut conn = self.conn.clone();
        let removed: usize = self
            .delete_pattern_script
            .arg(pattern)
            .invoke_async(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok(removed)
    }
}
