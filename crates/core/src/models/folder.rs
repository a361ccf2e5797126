use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::{deserialize_optional_uuid, null_as_default};

/// A template folder as returned by the remote API.
///
/// Folders are always fetched as a flat list scoped to one service;
/// `parent_id` is `None` for folders at the root of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFolder {
    pub id: Uuid,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub parent_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<Uuid>,
    /// Users allowed to see this folder.
    #[serde(default, deserialize_with = "null_as_default")]
    pub users_with_permission: BTreeSet<Uuid>,
}

impl TemplateFolder {
    /// Creates a new root folder with the given name and no permitted users.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_id: None,
            service_id: None,
            users_with_permission: BTreeSet::new(),
        }
    }

    /// Sets a specific ID for this folder (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Places this folder inside another folder.
    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Sets the owning service.
    pub fn with_service(mut self, service_id: Uuid) -> Self {
        self.service_id = Some(service_id);
        self
    }

    /// Replaces the set of users allowed to see this folder.
    pub fn with_users(mut self, users: BTreeSet<Uuid>) -> Self {
        self.users_with_permission = users;
        self
    }

    /// Grants one more user permission to see this folder.
    pub fn with_user(mut self, user_id: Uuid) -> Self {
        self.users_with_permission.insert(user_id);
        self
    }

    /// Returns true if `user_id` may see this folder.
    pub fn is_visible_to(&self, user_id: Uuid) -> bool {
        self.users_with_permission.contains(&user_id)
    }

    /// Returns true if this folder sits at the root of its service.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
