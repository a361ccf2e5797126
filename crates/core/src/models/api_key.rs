use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What an API key is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    /// Sends to anyone (once the service is live).
    Normal,
    /// Sends only to team members and guest list.
    Team,
    /// Pretends to send; nothing is delivered.
    Test,
}

/// An API key belonging to a service. The secret is never returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: Uuid,
    pub name: String,
    pub key_type: KeyType,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<Uuid>,
}

impl ApiKey {
    /// A revoked key has an expiry date.
    pub fn is_revoked(&self) -> bool {
        self.expiry_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revoked_key() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Production",
            "key_type": "normal",
            "expiry_date": "2024-06-15T10:30:00Z"
        }"#;
        let key: ApiKey = serde_json::from_str(json).unwrap();

        assert!(key.is_revoked());
        assert_eq!(key.key_type, KeyType::Normal);
    }
}
