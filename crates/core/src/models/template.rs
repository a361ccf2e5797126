use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::deserialize_optional_uuid;

/// The channel a template sends through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    Sms,
    Email,
    Letter,
    Broadcast,
}

impl TemplateType {
    /// Returns the name the remote API uses for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Sms => "sms",
            TemplateType::Email => "email",
            TemplateType::Letter => "letter",
            TemplateType::Broadcast => "broadcast",
        }
    }
}

fn first_version() -> u32 {
    1
}

/// A message template. Templates are the leaves of the folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub template_type: TemplateType,
    /// Containing folder, `None` for templates at the root.
    #[serde(
        default,
        rename = "folder",
        deserialize_with = "deserialize_optional_uuid"
    )]
    pub folder_id: Option<Uuid>,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default = "first_version")]
    pub version: u32,
    #[serde(default)]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Template {
    /// Creates a new root-level template.
    pub fn new(name: impl Into<String>, template_type: TemplateType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            template_type,
            folder_id: None,
            content: String::new(),
            subject: None,
            version: first_version(),
            archived: false,
            updated_at: None,
        }
    }

    /// Sets a specific ID for this template (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Places this template inside a folder.
    pub fn with_folder(mut self, folder_id: Uuid) -> Self {
        self.folder_id = Some(folder_id);
        self
    }

    /// Sets the template body.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the subject line (email and letter templates).
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

/// Usage of one template over a reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateUsage {
    pub template_id: Uuid,
    pub template_name: String,
    pub template_type: TemplateType,
    pub count: u64,
    #[serde(default)]
    pub is_precompiled_letter: bool,
}
