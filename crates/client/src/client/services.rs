//! Service API operations.

use notify_admin_core::cache::{
    api_keys_key, service_key, service_template_pattern, service_templates_key,
};
use notify_admin_core::models::{Service, UpdateServiceRequest};
use serde_json::Value;
use uuid::Uuid;

use super::{decode, NotifyClient};
use crate::cached::Invalidation;
use crate::error::Result;

impl NotifyClient {
    /// Get a service by ID.
    pub async fn get_service(&self, service_id: Uuid) -> Result<Service> {
        self.cached_get(
            &service_key(service_id),
            self.ttls.long,
            &format!("/service/{}", service_id),
            &[],
            Some("data"),
        )
        .await
    }

    /// Update service settings.
    pub async fn update_service(
        &self,
        service_id: Uuid,
        request: &UpdateServiceRequest,
    ) -> Result<Service> {
        let body = self
            .post(
                &format!("/service/{}", service_id),
                request,
                &[Invalidation::key(service_key(service_id))],
            )
            .await?;
        tracing::debug!(service_id = %service_id, "Service updated");
        decode(body, Some("data"))
    }

    /// Archive a service. It stops sending and disappears from listings.
    ///
    /// The remote API also archives the service's templates and revokes its
    /// API keys, so their cached views go too.
    pub async fn archive_service(&self, service_id: Uuid) -> Result<()> {
        self.post(
            &format!("/service/{}/archive", service_id),
            Value::Null,
            &[
                Invalidation::key(service_key(service_id)),
                Invalidation::key(service_templates_key(service_id)),
                Invalidation::pattern(service_template_pattern(service_id)),
                Invalidation::key(api_keys_key(service_id)),
            ],
        )
        .await?;
        tracing::debug!(service_id = %service_id, "Service archived");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::client_with_mocks;
    use notify_admin_core::cache::{
        template_folders_key, template_usage_key, template_version_key, template_versions_key,
    };

    fn service_json(id: Uuid, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "active": true,
            "restricted": false,
            "message_limit": 250000,
            "email_branding": null,
            "letter_branding": null,
            "permissions": ["email", "sms"]
        })
    }

    #[tokio::test]
    async fn test_get_service_is_cached() {
        let (client, transport, cache) = client_with_mocks();
        let id = Uuid::new_v4();
        transport
            .respond(
                "GET",
                &format!("/service/{}", id),
                json!({"data": service_json(id, "Renew a licence")}),
            )
            .await;

        let first = client.get_service(id).await.unwrap();
        let second = client.get_service(id).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.name, "Renew a licence");
        assert!(first.has_permission("sms"));
        assert_eq!(transport.call_count(), 1);
        assert!(cache.contains(&service_key(id)).await);
    }

    #[tokio::test]
    async fn test_update_service_invalidates() {
        let (client, transport, cache) = client_with_mocks();
        let id = Uuid::new_v4();
        cache.insert(&service_key(id), b"{}").await;
        transport
            .respond(
                "POST",
                &format!("/service/{}", id),
                json!({"data": service_json(id, "Renamed")}),
            )
            .await;

        let request = UpdateServiceRequest {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let updated = client.update_service(id, &request).await.unwrap();

        assert_eq!(updated.name, "Renamed");
        assert!(!cache.contains(&service_key(id)).await);
        let sent = transport.last_request().await.unwrap();
        assert_eq!(sent.body["name"], "Renamed");
        assert_eq!(
            sent.body["created_by"],
            client.actor().unwrap().to_string()
        );
    }

    #[tokio::test]
    async fn test_archive_failure_still_invalidates() {
        let (client, transport, cache) = client_with_mocks();
        let id = Uuid::new_v4();
        cache.insert(&service_key(id), b"{}").await;
        transport
            .fail("POST", &format!("/service/{}/archive", id), 500, "Internal server error")
            .await;

        let err = client.archive_service(id).await.unwrap_err();

        assert!(err.as_remote().is_some_and(|e| e.is_server_error()));
        assert!(!cache.contains(&service_key(id)).await);
    }

    #[tokio::test]
    async fn test_archive_drops_templates_and_api_keys() {
        let (client, transport, cache) = client_with_mocks();
        let (id, tid, other) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let keep = service_templates_key(other);
        for key in [
            service_key(id),
            service_templates_key(id),
            template_versions_key(id, tid),
            template_version_key(id, tid, None),
            template_folders_key(id),
            template_usage_key(id, 7),
            api_keys_key(id),
            keep.clone(),
        ] {
            cache.insert(&key, b"[]").await;
        }
        transport
            .respond("POST", &format!("/service/{}/archive", id), json!({}))
            .await;

        client.archive_service(id).await.unwrap();

        assert_eq!(cache.store.read().await.len(), 1);
        assert!(cache.contains(&keep).await);
    }
}
