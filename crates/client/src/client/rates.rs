//! Pricing reference data. Read-only.

use notify_admin_core::cache::{letter_rates_key, sms_rate_key};
use notify_admin_core::models::{LetterRate, SmsRate};

use super::NotifyClient;
use crate::error::Result;

impl NotifyClient {
    pub async fn get_letter_rates(&self) -> Result<Vec<LetterRate>> {
        self.cached_get(&letter_rates_key(), self.ttls.long, "/letter-rates", &[], None)
            .await
    }

    pub async fn get_sms_rate(&self) -> Result<SmsRate> {
        self.cached_get(&sms_rate_key(), self.ttls.long, "/sms-rate", &[], None)
            .await
    }
}
