//! Normalization and validation of submitted listing fields.
//!
//! Submissions are cleaned up here before anything touches the store, so a
//! rejected submission never leaves a partially written record behind.

use crate::error::CoreError;

/// Maximum length of a venue or artist name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of short text columns (city, state, phone, address).
pub const MAX_FIELD_LENGTH: usize = 120;

/// Maximum length of link columns.
pub const MAX_LINK_LENGTH: usize = 500;

/// Maximum length of a seeking description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;

/// Values an HTML checkbox may submit when ticked.
const CHECKBOX_TRUE_VALUES: &[&str] = &["y", "yes", "on", "true", "1"];

/// Trim a required field and check it is non-empty and within `max` characters.
pub fn required(field: &str, value: &str, max: usize) -> Result<String, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    check_length(field, value, max)?;
    Ok(value.to_string())
}

/// Trim an optional field; blank input becomes `None`.
pub fn optional(field: &str, value: Option<&str>, max: usize) -> Result<Option<String>, CoreError> {
    match normalize_optional(value) {
        Some(v) => {
            check_length(field, &v, max)?;
            Ok(Some(v))
        }
        None => Ok(None),
    }
}

/// Trim an optional link and require an `http(s)://` scheme when present.
pub fn optional_link(field: &str, value: Option<&str>) -> Result<Option<String>, CoreError> {
    let link = optional(field, value, MAX_LINK_LENGTH)?;
    if let Some(ref l) = link {
        let lower = l.to_ascii_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(CoreError::Validation(format!(
                "{field} must start with http:// or https://"
            )));
        }
    }
    Ok(link)
}

/// Collapse empty or whitespace-only text to `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Interpret an HTML checkbox value. A missing field is unticked.
pub fn parse_checkbox(value: Option<&str>) -> bool {
    value
        .map(|v| CHECKBOX_TRUE_VALUES.contains(&v.trim().to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Parse a submitted numeric id.
pub fn parse_id(field: &str, value: &str) -> Result<i64, CoreError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| CoreError::Validation(format!("{field} must be a positive integer")))
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn required_trims_value() {
        assert_eq!(required("Name", "  The Musical Hop ", 200).unwrap(), "The Musical Hop");
    }

    #[test]
    fn required_rejects_blank() {
        assert_matches!(
            required("Name", "   ", 200),
            Err(CoreError::Validation(msg)) if msg == "Name is required"
        );
    }

    #[test]
    fn required_rejects_overlong() {
        assert!(required("City", &"a".repeat(121), MAX_FIELD_LENGTH).is_err());
        assert!(required("City", &"a".repeat(120), MAX_FIELD_LENGTH).is_ok());
    }

    #[test]
    fn optional_blank_is_none() {
        assert_eq!(optional("Phone", Some(""), 120).unwrap(), None);
        assert_eq!(optional("Phone", Some("  "), 120).unwrap(), None);
        assert_eq!(optional("Phone", None, 120).unwrap(), None);
        assert_eq!(
            optional("Phone", Some(" 123-123-1234 "), 120).unwrap(),
            Some("123-123-1234".to_string())
        );
    }

    #[test]
    fn links_need_http_scheme() {
        assert!(optional_link("Facebook link", Some("https://www.facebook.com/TheMusicalHop")).is_ok());
        assert!(optional_link("Website", Some("HTTP://example.com")).is_ok());
        assert!(optional_link("Website", Some("ftp://example.com")).is_err());
        assert_eq!(optional_link("Website", Some("")).unwrap(), None);
    }

    #[test]
    fn checkbox_values() {
        assert!(parse_checkbox(Some("y")));
        assert!(parse_checkbox(Some("on")));
        assert!(parse_checkbox(Some("True")));
        assert!(!parse_checkbox(Some("n")));
        assert!(!parse_checkbox(Some("")));
        assert!(!parse_checkbox(None));
    }

    #[test]
    fn parse_id_accepts_positive_integers_only() {
        assert_eq!(parse_id("Venue id", " 42 ").unwrap(), 42);
        assert!(parse_id("Venue id", "0").is_err());
        assert!(parse_id("Venue id", "-3").is_err());
        assert!(parse_id("Venue id", "abc").is_err());
    }
}
