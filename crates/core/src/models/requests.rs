//! Request payloads for mutations sent to the remote API.
//!
//! Pure data types; the acting user is attached by the client when the
//! payload is sent, so none of these carry a `created_by` field.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{KeyType, TemplateType};

/// Request payload for creating a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    pub template_type: TemplateType,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<Uuid>,
}

impl CreateTemplateRequest {
    /// Create a request for a root-level template.
    pub fn new(
        name: impl Into<String>,
        template_type: TemplateType,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            template_type,
            content: content.into(),
            subject: None,
            parent_folder_id: None,
        }
    }

    /// Set the subject line.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Create the template inside a folder.
    pub fn in_folder(mut self, folder_id: Uuid) -> Self {
        self.parent_folder_id = Some(folder_id);
        self
    }
}

/// Request payload for updating a template's name or content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTemplateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Request payload for creating a template folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    pub name: String,
    pub parent_id: Option<Uuid>,
}

/// Request payload for renaming a folder or changing who can see it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFolderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_with_permission: Option<BTreeSet<Uuid>>,
}

/// Request payload for moving templates and folders into a target folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveToFolderRequest {
    #[serde(default)]
    pub templates: Vec<Uuid>,
    #[serde(default)]
    pub folders: Vec<Uuid>,
}

impl MoveToFolderRequest {
    /// Returns true if there is nothing to move.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.folders.is_empty()
    }
}

/// Request payload for creating an API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApiKeyRequest {
    pub name: String,
    pub key_type: KeyType,
}

/// Request payload for updating service settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateServiceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_branding: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_branding: Option<Uuid>,
}

/// Request payload for creating or updating email branding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailBrandingRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub brand_type: String,
}

/// Request payload for creating or updating letter branding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterBrandingRequest {
    pub name: String,
    pub filename: String,
}
