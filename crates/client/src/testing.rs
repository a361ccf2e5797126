//! Test doubles shared by the client's unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use notify_admin_core::cache::{pattern_matches, Cache, CacheError, Result as CacheResult};
use notify_admin_core::remote::RemoteError;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::client::{CacheTtls, NotifyClient};
use crate::error::{ClientError, Result};
use crate::transport::{ApiTransport, Params};

/// In-memory cache that counts every call and can be told to fail.
#[derive(Default)]
pub(crate) struct MockCache {
    pub store: RwLock<HashMap<String, Vec<u8>>>,
    pub ttls: RwLock<HashMap<String, Option<Duration>>>,
    pub get_calls: AtomicUsize,
    pub set_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub delete_pattern_calls: AtomicUsize,
    pub failing: AtomicBool,
}

impl MockCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub async fn insert(&self, key: &str, value: &[u8]) {
        self.store
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.store.read().await.contains_key(key)
    }

    pub async fn ttl_of(&self, key: &str) -> Option<Duration> {
        self.ttls.read().await.get(key).copied().flatten()
    }

    fn check(&self) -> CacheResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(CacheError::ConnectionFailed("store unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Cache for MockCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> CacheResult<()> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.store
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        self.ttls.write().await.insert(key.to_string(), ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.store.write().await.remove(key);
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> CacheResult<usize> {
        self.delete_pattern_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut store = self.store.write().await;
        let keys: Vec<_> = store
            .keys()
            .filter(|k| pattern_matches(pattern, k))
            .cloned()
            .collect();
        for key in &keys {
            store.remove(key);
        }
        Ok(keys.len())
    }
}

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub body: Value,
}

/// Transport answering from canned responses keyed by `"{METHOD} {path}"`.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: RwLock<HashMap<String, std::result::Result<Value, RemoteError>>>,
    pub requests: RwLock<Vec<Recorded>>,
    pub calls: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn respond(&self, method: &str, path: &str, body: Value) {
        self.responses
            .write()
            .await
            .insert(format!("{} {}", method, path), Ok(body));
    }

    pub async fn fail(&self, method: &str, path: &str, status_code: u16, message: &str) {
        self.responses.write().await.insert(
            format!("{} {}", method, path),
            Err(RemoteError::new(status_code, message)),
        );
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn last_request(&self) -> Option<Recorded> {
        self.requests.read().await.last().cloned()
    }

    async fn answer(&self, method: &'static str, path: &str, body: Value) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.write().await.push(Recorded {
            method,
            path: path.to_string(),
            body,
        });
        match self.responses.read().await.get(&format!("{} {}", method, path)) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(err)) => Err(ClientError::Remote(err.clone())),
            None => Err(ClientError::Remote(RemoteError::new(404, "No result found"))),
        }
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn get(&self, path: &str, _params: Params<'_>) -> Result<Value> {
        self.answer("GET", path, Value::Null).await
    }

    async fn post(&self, path: &str, data: Value) -> Result<Value> {
        self.answer("POST", path, data).await
    }

    async fn put(&self, path: &str, data: Value) -> Result<Value> {
        self.answer("PUT", path, data).await
    }

    async fn delete(&self, path: &str, data: Value) -> Result<Value> {
        self.answer("DELETE", path, data).await
    }
}

/// A client over fresh mocks, acting as a fixed user.
pub(crate) fn client_with_mocks() -> (NotifyClient, Arc<MockTransport>, Arc<MockCache>) {
    let transport = Arc::new(MockTransport::new());
    let cache = Arc::new(MockCache::new());
    let client = NotifyClient::new(transport.clone(), cache.clone(), CacheTtls::default())
        .with_actor(uuid::Uuid::new_v4());
    (client, transport, cache)
}
