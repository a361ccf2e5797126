mod error;
mod keys;
mod patterns;
mod serialization;
mod template;
mod traits;

pub use error::{CacheError, KeyResolutionError, Result};
pub use keys::{
    api_keys_key, email_branding_key, email_branding_list_key, letter_branding_key,
    letter_branding_list_key, letter_rates_key, service_key, service_pattern,
    service_template_pattern, service_templates_key, sms_rate_key, template_folders_key,
    template_usage_key, template_usage_pattern, template_version_key, template_version_pattern,
    template_versions_key, LATEST_VERSION,
};
pub use patterns::{is_pattern, pattern_matches};
pub use serialization::{deserialize, serialize, SerializationError};
pub use template::{CallArgs, KeyTemplate};
pub use traits::Cache;
