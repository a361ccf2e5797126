//! API key operations.

use notify_admin_core::cache::api_keys_key;
use notify_admin_core::models::{ApiKey, CreateApiKeyRequest};
use serde_json::Value;
use uuid::Uuid;

use super::{decode, NotifyClient};
use crate::cached::Invalidation;
use crate::error::Result;

impl NotifyClient {
    /// List a service's API keys, revoked ones included.
    pub async fn get_api_keys(&self, service_id: Uuid) -> Result<Vec<ApiKey>> {
        self.cached_get(
            &api_keys_key(service_id),
            self.ttls.long,
            &format!("/service/{}/api-keys", service_id),
            &[],
            Some("apiKeys"),
        )
        .await
    }

    /// Create an API key and return its secret. The secret is shown once and
    /// never cached.
    pub async fn create_api_key(
        &self,
        service_id: Uuid,
        request: &CreateApiKeyRequest,
    ) -> Result<String> {
        let body = self
            .post(
                &format!("/service/{}/api-key", service_id),
                request,
                &[Invalidation::key(api_keys_key(service_id))],
            )
            .await?;
        tracing::debug!(service_id = %service_id, name = %request.name, "API key created");
        decode(body, Some("data"))
    }

    pub async fn revoke_api_key(&self, service_id: Uuid, key_id: Uuid) -> Result<()> {
        self.post(
            &format!("/service/{}/api-key/revoke/{}", service_id, key_id),
            Value::Null,
            &[Invalidation::key(api_keys_key(service_id))],
        )
        .await?;
        tracing::debug!(service_id = %service_id, key_id = %key_id, "API key revoked");
        Ok(())
    }
}
