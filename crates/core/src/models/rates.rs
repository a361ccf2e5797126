use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Price of sending a letter of a given size and postage class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterRate {
    pub sheet_count: u32,
    pub rate: f64,
    pub post_class: String,
}

/// Price of one SMS fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsRate {
    pub rate: f64,
    pub valid_from: DateTime<Utc>,
}
