//! Typed cache key builders.
//!
//! Keys follow `{resource-type}-{scoping-id}[-{sub-resource}-{id}][-{suffix}]`
//! and must stay stable across a deployment: processes running different
//! builds share the same store. Each builder documents the template it
//! produces; the tests check every builder against its template.

use uuid::Uuid;

/// Version segment used when the latest template version is requested.
pub const LATEST_VERSION: &str = "latest";

/// `service-{service_id}`
pub fn service_key(service_id: Uuid) -> String {
    format!("service-{}", service_id)
}

/// `service-{service_id}-templates`
pub fn service_templates_key(service_id: Uuid) -> String {
    format!("service-{}-templates", service_id)
}

/// `service-{service_id}-template-{template_id}-version-{version}`
///
/// `None` caches the current version under [`LATEST_VERSION`].
pub fn template_version_key(service_id: Uuid, template_id: Uuid, version: Option<u32>) -> String {
    match version {
        Some(version) => format!(
            "service-{}-template-{}-version-{}",
            service_id, template_id, version
        ),
        None => format!(
            "service-{}-template-{}-version-{}",
            service_id, template_id, LATEST_VERSION
        ),
    }
}

/// `service-{service_id}-template-{template_id}-version-*`
pub fn template_version_pattern(service_id: Uuid, template_id: Uuid) -> String {
    format!("service-{}-template-{}-version-*", service_id, template_id)
}

/// `service-{service_id}-template-{template_id}-versions`
pub fn template_versions_key(service_id: Uuid, template_id: Uuid) -> String {
    format!("service-{}-template-{}-versions", service_id, template_id)
}

/// `service-{service_id}-template-*`, every per-template key of a service.
pub fn service_template_pattern(service_id: Uuid) -> String {
    format!("service-{}-template-*", service_id)
}

/// `service-{service_id}-template-folders`
pub fn template_folders_key(service_id: Uuid) -> String {
    format!("service-{}-template-folders", service_id)
}

/// `service-{service_id}-api-keys`
pub fn api_keys_key(service_id: Uuid) -> String {
    format!("service-{}-api-keys", service_id)
}

/// `service-{service_id}-template-usage-{limit_days}`
pub fn template_usage_key(service_id: Uuid, limit_days: u32) -> String {
    format!("service-{}-template-usage-{}", service_id, limit_days)
}

/// `service-{service_id}-template-usage-*`, usage reports for every window.
pub fn template_usage_pattern(service_id: Uuid) -> String {
    format!("service-{}-template-usage-*", service_id)
}

/// `service-{service_id}*`, every key scoped to a service.
pub fn service_pattern(service_id: Uuid) -> String {
    format!("service-{}*", service_id)
}

/// `email_branding`
pub fn email_branding_list_key() -> String {
    "email_branding".to_string()
}

/// `email_branding-{branding_id}`
pub fn email_branding_key(branding_id: Uuid) -> String {
    format!("email_branding-{}", branding_id)
}

/// `letter_branding`
pub fn letter_branding_list_key() -> String {
    "letter_branding".to_string()
}

/// `letter_branding-{branding_id}`
pub fn letter_branding_key(branding_id: Uuid) -> String {
    format!("letter_branding-{}", branding_id)
}

/// `letter-rates`
pub fn letter_rates_key() -> String {
    "letter-rates".to_string()
}

/// `sms-rate`
pub fn sms_rate_key() -> String {
    "sms-rate".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{pattern_matches, CallArgs, KeyTemplate};

    fn service_id() -> Uuid {
        Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap()
    }

    fn template_id() -> Uuid {
        Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap()
    }

    fn resolve(template: &str, args: CallArgs) -> String {
        KeyTemplate::new(template).unwrap().resolve(&args).unwrap()
    }

    #[test]
    fn test_service_key() {
        assert_eq!(
            service_key(service_id()),
            "service-550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_template_version_key_latest() {
        assert_eq!(
            template_version_key(service_id(), template_id(), None),
            "service-550e8400-e29b-41d4-a716-446655440000-template-6ba7b810-9dad-11d1-80b4-00c04fd430c8-version-latest"
        );
    }

    #[test]
    fn test_builders_agree_with_templates() {
        let (sid, tid) = (service_id(), template_id());
        let service_args = || CallArgs::new(["service_id"]).arg(sid);
        let template_args = || CallArgs::new(["service_id", "template_id"]).arg(sid).arg(tid);

        assert_eq!(service_key(sid), resolve("service-{service_id}", service_args()));
        assert_eq!(
            service_templates_key(sid),
            resolve("service-{service_id}-templates", service_args())
        );
        assert_eq!(
            template_folders_key(sid),
            resolve("service-{service_id}-template-folders", service_args())
        );
        assert_eq!(
            api_keys_key(sid),
            resolve("service-{service_id}-api-keys", service_args())
        );
        assert_eq!(
            template_versions_key(sid, tid),
            resolve(
                "service-{service_id}-template-{template_id}-versions",
                template_args()
            )
        );
        assert_eq!(
            template_version_key(sid, tid, Some(4)),
            resolve(
                "service-{service_id}-template-{template_id}-version-{version}",
                template_args().kwarg("version", 4)
            )
        );
        assert_eq!(
            template_version_pattern(sid, tid),
            resolve(
                "service-{service_id}-template-{template_id}-version-*",
                template_args()
            )
        );
        assert_eq!(
            template_usage_key(sid, 7),
            resolve(
                "service-{service_id}-template-usage-{limit_days}",
                service_args().kwarg("limit_days", 7)
            )
        );
        assert_eq!(
            email_branding_key(tid),
            resolve(
                "email_branding-{branding_id}",
                CallArgs::default().kwarg("branding_id", tid)
            )
        );
        assert_eq!(
            letter_branding_key(tid),
            resolve(
                "letter_branding-{branding_id}",
                CallArgs::default().kwarg("branding_id", tid)
            )
        );
    }

    #[test]
    fn test_version_pattern_covers_every_version_key() {
        let (sid, tid) = (service_id(), template_id());
        let pattern = template_version_pattern(sid, tid);

        assert!(pattern_matches(&pattern, &template_version_key(sid, tid, None)));
        assert!(pattern_matches(&pattern, &template_version_key(sid, tid, Some(1))));
        assert!(pattern_matches(&pattern, &template_version_key(sid, tid, Some(42))));
        assert!(!pattern_matches(&pattern, &template_versions_key(sid, tid)));
        assert!(!pattern_matches(
            &pattern,
            &template_version_key(sid, Uuid::nil(), Some(1))
        ));
    }

    #[test]
    fn test_usage_pattern_covers_every_window() {
        let sid = Uuid::new_v4();
        let pattern = template_usage_pattern(sid);

        assert_eq!(
            pattern,
            resolve(
                "service-{service_id}-template-usage-*",
                CallArgs::new(["service_id"]).arg(sid)
            )
        );
        assert!(pattern_matches(&pattern, &template_usage_key(sid, 7)));
        assert!(pattern_matches(&pattern, &template_usage_key(sid, 30)));
        assert!(!pattern_matches(&pattern, &template_usage_key(Uuid::nil(), 7)));
        assert!(!pattern_matches(&pattern, &service_templates_key(sid)));
    }

    #[test]
    fn test_service_template_pattern_scope() {
        let (sid, tid) = (service_id(), template_id());
        let pattern = service_template_pattern(sid);

        assert!(pattern_matches(&pattern, &template_versions_key(sid, tid)));
        assert!(pattern_matches(&pattern, &template_version_key(sid, tid, None)));
        assert!(pattern_matches(&pattern, &template_usage_key(sid, 7)));
        // The list keys are invalidated explicitly, not through this pattern.
        assert!(!pattern_matches(&pattern, &service_templates_key(sid)));
        assert!(!pattern_matches(&pattern, &service_key(sid)));
        assert!(!pattern_matches(&pattern, &template_versions_key(Uuid::nil(), tid)));
    }

    #[test]
    fn test_service_pattern_scope() {
        let sid = service_id();
        let pattern = service_pattern(sid);

        assert!(pattern_matches(&pattern, &service_key(sid)));
        assert!(pattern_matches(&pattern, &service_templates_key(sid)));
        assert!(pattern_matches(&pattern, &api_keys_key(sid)));
        assert!(!pattern_matches(&pattern, &service_key(Uuid::nil())));
        assert!(!pattern_matches(&pattern, &email_branding_list_key()));
    }

    #[test]
    fn test_global_keys() {
        assert_eq!(email_branding_list_key(), "email_branding");
        assert_eq!(letter_branding_list_key(), "letter_branding");
        assert_eq!(letter_rates_key(), "letter-rates");
        assert_eq!(sms_rate_key(), "sms-rate");
    }
}
