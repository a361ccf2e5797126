//! JSON output formatting.

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Render raw cached bytes: JSON if they decode, otherwise lossy UTF-8.
pub fn format_cached_bytes(bytes: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_default(),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cached_bytes_json() {
        assert_eq!(format_cached_bytes(br#"{"a":1}"#), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_format_cached_bytes_not_json() {
        assert_eq!(format_cached_bytes(b"plain"), "plain");
    }
}
