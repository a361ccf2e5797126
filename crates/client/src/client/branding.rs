//! Email and letter branding API operations.
//!
//! Branding is global, not scoped to a service. Each resource is cached
//! twice: the full list and each item by ID.

use notify_admin_core::cache::{
    email_branding_key, email_branding_list_key, letter_branding_key, letter_branding_list_key,
};
use notify_admin_core::models::{
    EmailBranding, EmailBrandingRequest, LetterBranding, LetterBrandingRequest,
};
use uuid::Uuid;

use super::{decode, NotifyClient};
use crate::cached::Invalidation;
use crate::error::Result;

fn email_branding_targets(branding_id: Uuid) -> [Invalidation; 2] {
    [
        Invalidation::key(email_branding_list_key()),
        Invalidation::key(email_branding_key(branding_id)),
    ]
}

fn letter_branding_targets(branding_id: Uuid) -> [Invalidation; 2] {
    [
        Invalidation::key(letter_branding_list_key()),
        Invalidation::key(letter_branding_key(branding_id)),
    ]
}

impl NotifyClient {
    pub async fn get_all_email_branding(&self) -> Result<Vec<EmailBranding>> {
        self.cached_get(
            &email_branding_list_key(),
            self.ttls.long,
            "/email-branding",
            &[],
            Some("email_branding"),
        )
        .await
    }

    pub async fn get_email_branding(&self, branding_id: Uuid) -> Result<EmailBranding> {
        self.cached_get(
            &email_branding_key(branding_id),
            self.ttls.long,
            &format!("/email-branding/{}", branding_id),
            &[],
            Some("email_branding"),
        )
        .await
    }

    pub async fn create_email_branding(
        &self,
        request: &EmailBrandingRequest,
    ) -> Result<EmailBranding> {
        // The new ID is unknown until the response, so only the list is stale.
        let body = self
            .post(
                "/email-branding",
                request,
                &[Invalidation::key(email_branding_list_key())],
            )
            .await?;
        let branding: EmailBranding = decode(body, Some("data"))?;
        tracing::debug!(branding_id = %branding.id, name = %branding.name, "Email branding created");
        Ok(branding)
    }

    pub async fn update_email_branding(
        &self,
        branding_id: Uuid,
        request: &EmailBrandingRequest,
    ) -> Result<()> {
        self.post(
            &format!("/email-branding/{}", branding_id),
            request,
            &email_branding_targets(branding_id),
        )
        .await?;
        tracing::debug!(branding_id = %branding_id, "Email branding updated");
        Ok(())
    }

    pub async fn get_all_letter_branding(&self) -> Result<Vec<LetterBranding>> {
        self.cached_get(
            &letter_branding_list_key(),
            self.ttls.long,
            "/letter-branding",
            &[],
            None,
        )
        .await
    }

    pub async fn get_letter_branding(&self, branding_id: Uuid) -> Result<LetterBranding> {
        self.cached_get(
            &letter_branding_key(branding_id),
            self.ttls.long,
            &format!("/letter-branding/{}", branding_id),
            &[],
            None,
        )
        .await
    }

    pub async fn create_letter_branding(
        &self,
        request: &LetterBrandingRequest,
    ) -> Result<LetterBranding> {
        let body = self
            .post(
                "/letter-branding",
                request,
                &[Invalidation::key(letter_branding_list_key())],
            )
            .await?;
        let branding: LetterBranding = decode(body, None)?;
        tracing::debug!(branding_id = %branding.id, name = %branding.name, "Letter branding created");
        Ok(branding)
    }

    pub async fn update_letter_branding(
        &self,
        branding_id: Uuid,
        request: &LetterBrandingRequest,
    ) -> Result<()> {
        self.post(
            &format!("/letter-branding/{}", branding_id),
            request,
            &letter_branding_targets(branding_id),
        )
        .await?;
        tracing::debug!(branding_id = %branding_id, "Letter branding updated");
        Ok(())
    }
}
