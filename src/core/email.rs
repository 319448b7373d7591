//! Syntactic email checks. No DNS or mailbox lookups.

use crate::domain::model::ValidationResult;
use regex::Regex;
use std::sync::LazyLock;

pub const REQUIRED_MESSAGE: &str = "Email is required";
pub const INVALID_MESSAGE: &str = "Please enter a valid email address";
pub const DETAILED_INVALID_MESSAGE: &str =
    "Please enter a valid email address (e.g., user@example.com)";

/// A single trailing dot after the top-level label is accepted.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\.?$")
        .expect("EMAIL_REGEX is a valid regex pattern")
});

pub fn is_valid_email(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    EMAIL_REGEX.is_match(trimmed)
}

pub fn validation_message(raw: &str) -> String {
    if raw.trim().is_empty() {
        REQUIRED_MESSAGE.to_string()
    } else if !is_valid_email(raw) {
        INVALID_MESSAGE.to_string()
    } else {
        String::new()
    }
}

pub fn detailed_validate(raw: &str) -> ValidationResult {
    if raw.trim().is_empty() {
        return ValidationResult::invalid(REQUIRED_MESSAGE);
    }
    if !is_valid_email(raw) {
        return ValidationResult::invalid(DETAILED_INVALID_MESSAGE);
    }
    ValidationResult::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+club@mail.school.ac.ke"));
        assert!(is_valid_email("a_b%c-d@sub-domain.org"));
    }

    #[test]
    fn test_trailing_dot_is_accepted() {
        assert!(is_valid_email("user@example.com."));
        assert!(!is_valid_email("user@example.com.."));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.c0m"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@@example.com"));
    }

    #[test]
    fn test_empty_is_required() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert_eq!(validation_message(""), REQUIRED_MESSAGE);
        assert_eq!(validation_message("nope"), INVALID_MESSAGE);
        assert_eq!(validation_message("user@example.com"), "");
    }

    #[test]
    fn test_detailed_validate() {
        assert_eq!(
            detailed_validate("user@example.com"),
            ValidationResult::valid()
        );

        let bad = detailed_validate("nope");
        assert!(!bad.is_valid);
        assert!(bad.error_message.contains("user@example.com"));

        let empty = detailed_validate(" ");
        assert_eq!(empty.error_message, REQUIRED_MESSAGE);
    }
}
