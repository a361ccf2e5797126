//! Pure pattern matching functions for cache keys.
//!
//! Patterns follow the glob dialect the key/value store understands:
//! `*` matches any run of characters (including none) and `?` matches
//! exactly one character. Every other character matches itself.

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use notify_admin_core::cache::pattern_matches;
///
/// // Exact match
/// assert!(pattern_matches("service-123", "service-123"));
///
/// // Wildcard at end
/// assert!(pattern_matches("service-1-template-2-version-*", "service-1-template-2-version-7"));
///
/// // Wildcard in the middle
/// assert!(pattern_matches("service-*-templates", "service-abc-templates"));
///
/// // Single character wildcard
/// assert!(pattern_matches("sms-rat?", "sms-rate"));
///
/// // No match
/// assert!(!pattern_matches("service-1-*", "email_branding-1"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let key: Vec<char> = key.chars().collect();

    let (mut p, mut k) = (0, 0);
    // Position of the last `*` seen and the key position it was tried against.
    let mut backtrack: Option<(usize, usize)> = None;

    while k < key.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, k));
                p += 1;
            }
            Some('?') => {
                p += 1;
                k += 1;
            }
            Some(c) if *c == key[k] => {
                p += 1;
                k += 1;
            }
            _ => match backtrack {
                // Let the last star swallow one more character and retry.
                Some((star, star_k)) => {
                    p = star + 1;
                    k = star_k + 1;
                    backtrack = Some((star, star_k + 1));
                }
                None => return false,
            },
        }
    }

    // Only trailing stars may remain.
    pattern[p..].iter().all(|c| *c == '*')
}

/// Returns true if the string contains glob metacharacters.
pub fn is_pattern(candidate: &str) -> bool {
    candidate.contains(['*', '?'])
}
