use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use notify_admin_core::cache::{
    deserialize, serialize, Cache, CallArgs, KeyResolutionError, KeyTemplate,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Cache-aside reads in front of the remote API.
///
/// Every read performs exactly one `get` against the store. A hit is
/// returned without calling the fetcher. A miss (absent key, unreachable
/// store, or bytes that no longer decode) calls the fetcher once and writes
/// the result back with exactly one `set`. Store failures are logged and
/// never reach the caller; fetcher errors propagate unchanged and nothing is
/// cached.
#[derive(Clone)]
pub struct ReadThroughCache {
    cache: Arc<dyn Cache>,
}

impl ReadThroughCache {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self { cache }
    }

    pub fn store(&self) -> &Arc<dyn Cache> {
        &self.cache
    }

    pub async fn get_or_fetch<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        fetch: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match self.cache.get(key).await {
            Ok(Some(bytes)) => match deserialize::<T>(&bytes) {
                Ok(value) => {
                    tracing::trace!(key = %key, "Cache hit");
                    return Ok(value);
                }
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "Cached value failed to decode");
                }
            },
            Ok(None) => tracing::trace!(key = %key, "Cache miss"),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Cache read failed, fetching from API");
            }
        }

        let value = fetch().await?;

        match serialize(&value) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(key, &bytes, Some(ttl)).await {
                    tracing::warn!(key = %key, error = %err, "Failed to cache value");
                }
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Failed to serialize value for cache");
            }
        }

        Ok(value)
    }

    /// Like [`get_or_fetch`](Self::get_or_fetch), resolving the key from a
    /// template first.
    ///
    /// A template that cannot be resolved fails before the store or the
    /// fetcher is touched.
    pub async fn get_or_fetch_templated<T, E, F, Fut>(
        &self,
        template: &KeyTemplate,
        args: &CallArgs,
        ttl: Duration,
        fetch: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<KeyResolutionError>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let key = template.resolve(args)?;
        self.get_or_fetch(&key, ttl, fetch).await
    }
}
