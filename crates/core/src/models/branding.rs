use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Branding applied to emails sent by a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailBranding {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default = "default_brand_type")]
    pub brand_type: String,
}

fn default_brand_type() -> String {
    "org".to_string()
}

/// Branding printed on letters sent by a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterBranding {
    pub id: Uuid,
    pub name: String,
    pub filename: String,
}
