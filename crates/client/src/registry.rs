//! Process-wide wiring of transport, cache and TTLs.
//!
//! Built once at startup and passed to whatever needs a client. There is no
//! global instance; tests build their own registry over mocks.

use std::sync::Arc;

use notify_admin_core::cache::{Cache, Result as CacheResult};
use uuid::Uuid;

use crate::client::{CacheTtls, NotifyClient};
use crate::transport::ApiTransport;

#[derive(Clone)]
pub struct ClientRegistry {
    client: NotifyClient,
}

impl ClientRegistry {
    pub fn new(transport: Arc<dyn ApiTransport>, cache: Arc<dyn Cache>, ttls: CacheTtls) -> Self {
        Self {
            client: NotifyClient::new(transport, cache, ttls),
        }
    }

    /// A read-only client. Mutations through it fail with `MissingActor`.
    pub fn client(&self) -> &NotifyClient {
        &self.client
    }

    /// A client that attributes its mutations to `actor`.
    pub fn for_actor(&self, actor: Uuid) -> NotifyClient {
        self.client.clone().with_actor(actor)
    }

    pub fn cache(&self) -> &Arc<dyn Cache> {
        self.client.cache()
    }

    /// Drop every cached entry. Returns how many keys were removed.
    pub async fn reset_all(&self) -> CacheResult<usize> {
        let removed = self.cache().delete_pattern("*").await?;
        tracing::info!(removed, "Cache reset");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ClientError;
    use crate::testing::{MockCache, MockTransport};

    fn registry() -> (ClientRegistry, Arc<MockCache>) {
        let cache = Arc::new(MockCache::new());
        let registry = ClientRegistry::new(
            Arc::new(MockTransport::new()),
            cache.clone(),
            CacheTtls::default(),
        );
        (registry, cache)
    }

    #[tokio::test]
    async fn test_reset_all_flushes_everything() {
        let (registry, cache) = registry();
        cache.insert("service-1", b"{}").await;
        cache.insert("email_branding", b"[]").await;
        cache.insert("sms-rate", b"{}").await;

        let removed = registry.reset_all().await.unwrap();

        assert_eq!(removed, 3);
        assert!(cache.store.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_default_client_cannot_mutate() {
        let (registry, _cache) = registry();

        let result = registry
            .client()
            .archive_service(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(ClientError::MissingActor)));
    }

    #[test]
    fn test_for_actor() {
        let (registry, _cache) = registry();
        let actor = Uuid::new_v4();

        assert_eq!(registry.for_actor(actor).actor(), Some(actor));
        assert_eq!(registry.client().actor(), None);
    }
}
