//! Cached client for the notify remote API.
//!
//! Resource operations are split by resource type, one `impl NotifyClient`
//! block per module. Every read goes through the read-through cache under
//! a typed key; every mutation goes through the invalidation guard with the
//! keys it makes stale.

pub mod api_keys;
pub mod branding;
pub mod rates;
pub mod services;
pub mod template_folders;
pub mod templates;

use std::sync::Arc;
use std::time::Duration;

use notify_admin_core::cache::Cache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::cached::{Invalidation, InvalidationGuard, ReadThroughCache};
use crate::error::{ClientError, Result};
use crate::transport::{ApiTransport, Params};

/// Time-to-live for each class of cached resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtls {
    /// Slow-changing resources: services, templates, folders, branding, rates.
    pub long: Duration,
    /// Aggregates and reports, such as template usage statistics.
    pub short: Duration,
}

impl CacheTtls {
    pub const DEFAULT_LONG: Duration = Duration::from_secs(7 * 24 * 60 * 60);
    pub const DEFAULT_SHORT: Duration = Duration::from_secs(60 * 60);

    pub fn new(long: Duration, short: Duration) -> Self {
        Self { long, short }
    }
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LONG, Self::DEFAULT_SHORT)
    }
}

/// Client for the remote API with a shared cache in front of it.
///
/// Cloning is cheap; clones share the transport and the cache.
#[derive(Clone)]
pub struct NotifyClient {
    transport: Arc<dyn ApiTransport>,
    reads: ReadThroughCache,
    invalidations: InvalidationGuard,
    ttls: CacheTtls,
    actor: Option<Uuid>,
}

impl NotifyClient {
    /// Create a client without an acting user. Reads work; mutations fail
    /// with [`ClientError::MissingActor`] until [`with_actor`](Self::with_actor)
    /// is called.
    pub fn new(transport: Arc<dyn ApiTransport>, cache: Arc<dyn Cache>, ttls: CacheTtls) -> Self {
        Self {
            transport,
            reads: ReadThroughCache::new(cache.clone()),
            invalidations: InvalidationGuard::new(cache),
            ttls,
            actor: None,
        }
    }

    /// Attribute every mutation sent by this client to `actor`.
    pub fn with_actor(mut self, actor: Uuid) -> Self {
        self.actor = Some(actor);
        self
    }

    pub fn actor(&self) -> Option<Uuid> {
        self.actor
    }

    pub fn ttls(&self) -> CacheTtls {
        self.ttls
    }

    pub fn cache(&self) -> &Arc<dyn Cache> {
        self.reads.store()
    }

    pub fn reads(&self) -> &ReadThroughCache {
        &self.reads
    }

    pub fn invalidations(&self) -> &InvalidationGuard {
        &self.invalidations
    }

    /// GET `path` through the cache, decoding the whole body (or the named
    /// envelope field) as `T`.
    async fn cached_get<T>(
        &self,
        key: &str,
        ttl: Duration,
        path: &str,
        params: Params<'_>,
        field: Option<&str>,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        self.reads
            .get_or_fetch(key, ttl, || async {
                let body = self.transport.get(path, params).await?;
                decode(body, field)
            })
            .await
    }

    /// POST `data` with the actor attached, then invalidate `targets`.
    ///
    /// The typed resource methods are built on this and its PUT and DELETE
    /// siblings; use them directly for endpoints without a typed wrapper.
    pub async fn post(
        &self,
        path: &str,
        data: impl Serialize,
        targets: &[Invalidation],
    ) -> Result<Value> {
        let payload = self.actor_payload(data)?;
        self.invalidations
            .run(targets, self.transport.post(path, payload))
            .await
    }

    /// PUT `data` with the actor attached, then invalidate `targets`.
    pub async fn put(
        &self,
        path: &str,
        data: impl Serialize,
        targets: &[Invalidation],
    ) -> Result<Value> {
        let payload = self.actor_payload(data)?;
        self.invalidations
            .run(targets, self.transport.put(path, payload))
            .await
    }

    /// DELETE with the actor attached as a JSON body, then invalidate
    /// `targets`.
    pub async fn delete(
        &self,
        path: &str,
        data: impl Serialize,
        targets: &[Invalidation],
    ) -> Result<Value> {
        let payload = self.actor_payload(data)?;
        self.invalidations
            .run(targets, self.transport.delete(path, payload))
            .await
    }

    fn actor_payload(&self, data: impl Serialize) -> Result<Value> {
        let actor = self.actor.ok_or(ClientError::MissingActor)?;
        attach_actor(serde_json::to_value(data)?, actor)
    }
}

/// Adds `created_by` to a mutation payload.
///
/// `null` becomes an object holding only the actor; any other non-object
/// payload is rejected.
pub(crate) fn attach_actor(payload: Value, actor: Uuid) -> Result<Value> {
    let mut object = match payload {
        Value::Object(object) => object,
        Value::Null => serde_json::Map::new(),
        other => {
            return Err(ClientError::InvalidPayload(format!(
                "mutation payload must be a JSON object, got {}",
                other
            )))
        }
    };
    object.insert("created_by".to_string(), Value::String(actor.to_string()));
    Ok(Value::Object(object))
}

/// Decodes a response body, optionally unwrapping an envelope field such as
/// `{"data": ...}`.
pub(crate) fn decode<T: DeserializeOwned>(body: Value, field: Option<&str>) -> Result<T> {
    let value = match field {
        None => body,
        Some(field) => match body {
            Value::Object(mut object) => object.remove(field).ok_or_else(|| {
                ClientError::InvalidResponse(format!("response has no '{}' field", field))
            })?,
            _ => {
                return Err(ClientError::InvalidResponse(format!(
                    "expected an object with a '{}' field",
                    field
                )))
            }
        },
    };
    Ok(serde_json::from_value(value)?)
}
