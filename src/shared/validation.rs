use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating email fields on registration and contact forms
    /// - Valid: "user@example.com", "a.b+c@host.co"
    /// - Invalid: "user@", "@host", "user host@x.y"
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Validator for required text fields. Services trim these fields before
/// persistence, so the emptiness check must apply to the trimmed value or a
/// whitespace-only submission would be stored as an empty string.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_regex_valid() {
        assert!(EMAIL_REGEX.is_match("user@example.com"));
        assert!(EMAIL_REGEX.is_match("a.b+c@host.co"));
        assert!(EMAIL_REGEX.is_match("amit@example.com"));
    }

    #[test]
    fn test_email_regex_invalid() {
        assert!(!EMAIL_REGEX.is_match("user@")); // no domain
        assert!(!EMAIL_REGEX.is_match("@host.com")); // no local part
        assert!(!EMAIL_REGEX.is_match("user host@x.y")); // whitespace
        assert!(!EMAIL_REGEX.is_match("userhost.com")); // no @
        assert!(!EMAIL_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_not_blank_rejects_whitespace_only() {
        assert!(not_blank("Medical camp setup").is_ok());
        assert!(not_blank("  padded  ").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
    }
}
