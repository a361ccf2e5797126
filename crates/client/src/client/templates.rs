//! Template API operations.

use notify_admin_core::cache::{
    service_templates_key, template_usage_key, template_usage_pattern, template_version_key,
    template_version_pattern, template_versions_key,
};
use notify_admin_core::models::{
    CreateTemplateRequest, Template, TemplateUsage, UpdateTemplateRequest,
};
use serde_json::json;
use uuid::Uuid;

use super::{decode, NotifyClient};
use crate::cached::Invalidation;
use crate::error::Result;

/// Everything cached about one template, plus the service-wide views that
/// list it: the template list and every usage report.
fn template_targets(service_id: Uuid, template_id: Uuid) -> [Invalidation; 4] {
    [
        Invalidation::key(service_templates_key(service_id)),
        Invalidation::key(template_versions_key(service_id, template_id)),
        Invalidation::pattern(template_version_pattern(service_id, template_id)),
        Invalidation::pattern(template_usage_pattern(service_id)),
    ]
}

impl NotifyClient {
    /// List a service's templates.
    pub async fn get_service_templates(&self, service_id: Uuid) -> Result<Vec<Template>> {
        self.cached_get(
            &service_templates_key(service_id),
            self.ttls.long,
            &format!("/service/{}/template", service_id),
            &[],
            Some("data"),
        )
        .await
    }

    /// Get a template, at a specific version or the latest one.
    pub async fn get_service_template(
        &self,
        service_id: Uuid,
        template_id: Uuid,
        version: Option<u32>,
    ) -> Result<Template> {
        let path = match version {
            Some(version) => format!(
                "/service/{}/template/{}/version/{}",
                service_id, template_id, version
            ),
            None => format!("/service/{}/template/{}", service_id, template_id),
        };
        self.cached_get(
            &template_version_key(service_id, template_id, version),
            self.ttls.long,
            &path,
            &[],
            Some("data"),
        )
        .await
    }

    /// Every saved version of a template, newest first.
    pub async fn get_service_template_versions(
        &self,
        service_id: Uuid,
        template_id: Uuid,
    ) -> Result<Vec<Template>> {
        self.cached_get(
            &template_versions_key(service_id, template_id),
            self.ttls.long,
            &format!("/service/{}/template/{}/versions", service_id, template_id),
            &[],
            Some("data"),
        )
        .await
    }

    /// Create a template.
    pub async fn create_service_template(
        &self,
        service_id: Uuid,
        request: &CreateTemplateRequest,
    ) -> Result<Template> {
        let body = self
            .post(
                &format!("/service/{}/template", service_id),
                request,
                &[
                    Invalidation::key(service_templates_key(service_id)),
                    Invalidation::pattern(template_usage_pattern(service_id)),
                ],
            )
            .await?;
        let template: Template = decode(body, Some("data"))?;
        tracing::debug!(
            service_id = %service_id,
            template_id = %template.id,
            name = %template.name,
            "Template created"
        );
        Ok(template)
    }

    /// Update a template's name or content. Creates a new version remotely.
    pub async fn update_service_template(
        &self,
        service_id: Uuid,
        template_id: Uuid,
        request: &UpdateTemplateRequest,
    ) -> Result<Template> {
        let body = self
            .post(
                &format!("/service/{}/template/{}", service_id, template_id),
                request,
                &template_targets(service_id, template_id),
            )
            .await?;
        tracing::debug!(service_id = %service_id, template_id = %template_id, "Template updated");
        decode(body, Some("data"))
    }

    /// Hide personalisation values in sent messages for this template.
    pub async fn redact_service_template(&self, service_id: Uuid, template_id: Uuid) -> Result<()> {
        self.post(
            &format!("/service/{}/template/{}", service_id, template_id),
            json!({"redact_personalisation": true}),
            &template_targets(service_id, template_id),
        )
        .await?;
        tracing::debug!(service_id = %service_id, template_id = %template_id, "Template redacted");
        Ok(())
    }

    /// Delete (archive) a template.
    pub async fn delete_service_template(&self, service_id: Uuid, template_id: Uuid) -> Result<()> {
        self.post(
            &format!("/service/{}/template/{}", service_id, template_id),
            json!({"archived": true}),
            &template_targets(service_id, template_id),
        )
        .await?;
        tracing::debug!(service_id = %service_id, template_id = %template_id, "Template deleted");
        Ok(())
    }

    /// Per-template send counts over the last `limit_days` days.
    ///
    /// Cached with the short TTL.
    pub async fn get_template_usage(
        &self,
        service_id: Uuid,
        limit_days: u32,
    ) -> Result<Vec<TemplateUsage>> {
        self.cached_get(
            &template_usage_key(service_id, limit_days),
            self.ttls.short,
            &format!("/service/{}/template-statistics", service_id),
            &[("limit_days", limit_days.to_string())],
            Some("data"),
        )
        .await
    }
}
