//! Kenyan and international phone number checks.
//!
//! Accepted shapes, after whitespace, hyphens and parentheses are removed:
//!
//! * `07XXXXXXXX` / `01XXXXXXXX` (local, 10 digits)
//! * `+2547XXXXXXXX` / `+2541XXXXXXXX`
//! * `+` followed by 10 to 15 digits

use crate::domain::model::ValidationResult;
use regex::Regex;
use std::sync::LazyLock;

pub const REQUIRED_MESSAGE: &str = "Phone number is required";
pub const INVALID_MESSAGE: &str =
    "Please enter a valid phone number (e.g., 0712345678, 0112345678, +254712345678, or +1234567890)";

const KENYA_PREFIX: &str = "+254";

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0[17][0-9]{8}|\+254[17][0-9]{8}|\+[0-9]{10,15})$")
        .expect("PHONE_REGEX is a valid regex pattern")
});

fn strip_separators(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

fn is_local(cleaned: &str) -> bool {
    cleaned.starts_with("07") || cleaned.starts_with("01")
}

pub fn is_valid_phone(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return false;
    }
    PHONE_REGEX.is_match(&strip_separators(raw))
}

pub fn validation_message(raw: &str) -> String {
    if raw.trim().is_empty() {
        REQUIRED_MESSAGE.to_string()
    } else if !is_valid_phone(raw) {
        INVALID_MESSAGE.to_string()
    } else {
        String::new()
    }
}

/// Rewrites a local number to the `+254` form. Anything else comes back
/// with separators removed; the result is not validated.
pub fn normalize(raw: &str) -> String {
    let cleaned = strip_separators(raw);
    if is_local(&cleaned) {
        format!("{}{}", KENYA_PREFIX, &cleaned[1..])
    } else {
        cleaned
    }
}

/// Display grouping: `+254 712 345 678` or `07 123 456 78`.
///
/// Only whitespace and hyphens are removed before grouping. Input that is
/// neither `+254` nor local is returned exactly as given.
pub fn format(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if cleaned.starts_with(KENYA_PREFIX) {
        group(&cleaned, &[4, 3, 3, 3])
    } else if is_local(&cleaned) {
        group(&cleaned, &[2, 3, 3, 3])
    } else {
        raw.to_string()
    }
}

/// Inserts a space after each group boundary that is followed by more
/// characters. Characters past the last group stay attached to it.
fn group(value: &str, sizes: &[usize]) -> String {
    let mut boundaries = Vec::with_capacity(sizes.len());
    let mut offset = 0;
    for size in sizes {
        offset += size;
        boundaries.push(offset);
    }

    let total = value.chars().count();
    let mut out = String::with_capacity(value.len() + sizes.len());
    for (i, c) in value.chars().enumerate() {
        out.push(c);
        let position = i + 1;
        if position < total && boundaries.contains(&position) {
            out.push(' ');
        }
    }
    out
}

pub fn detailed_validate(raw: &str) -> ValidationResult {
    if raw.trim().is_empty() {
        return ValidationResult::invalid(REQUIRED_MESSAGE);
    }
    if !is_valid_phone(raw) {
        return ValidationResult::invalid(INVALID_MESSAGE);
    }
    ValidationResult::valid()
}
