use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::null_as_default;

/// A service sending notifications through the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Restricted services are still in trial mode.
    #[serde(default)]
    pub restricted: bool,
    #[serde(default)]
    pub message_limit: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_branding: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_branding: Option<Uuid>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
}

fn default_active() -> bool {
    true
}

impl Service {
    /// Creates a new active, restricted service.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            active: true,
            restricted: true,
            message_limit: 0,
            email_branding: None,
            letter_branding: None,
            permissions: Vec::new(),
        }
    }

    /// Sets a specific ID for this service (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Returns true if the service has the named permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}
