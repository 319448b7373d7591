//! Age bracket lookup and checks.
//!
//! Two bracket tables exist, chosen per call with [`AgeGroupFormat`]. Within
//! a table the ranges are contiguous and do not overlap; nothing here checks
//! that at runtime.

use crate::domain::model::{AgeGroup, AgeGroupCheck, AgeGroupFormat, AgeRange};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Upper bound used for open-ended `N+` brackets.
pub const OPEN_ENDED_MAX: i32 = 100;

struct Bracket {
    min: i32,
    max: i32,
    label: &'static str,
}

const fn bracket(min: i32, max: i32, label: &'static str) -> Bracket {
    Bracket { min, max, label }
}

const STANDARD_BRACKETS: &[Bracket] = &[
    bracket(0, 9, "U9"),
    bracket(10, 11, "U11"),
    bracket(12, 13, "U13"),
    bracket(14, 15, "U15"),
    bracket(16, 17, "U17"),
    bracket(18, 19, "U19"),
    bracket(20, 23, "20-23"),
    bracket(24, 30, "24-30"),
    bracket(31, 40, "31-40"),
    bracket(41, 50, "41-50"),
    bracket(51, OPEN_ENDED_MAX, "51+"),
];

const ALTERNATE_BRACKETS: &[Bracket] = &[
    bracket(0, 11, "Under 12"),
    bracket(12, 14, "12-14"),
    bracket(15, 17, "15-17"),
    bracket(18, 23, "18-23"),
    bracket(24, 30, "24-30"),
    bracket(31, 40, "31-40"),
    bracket(41, 50, "41-50"),
    bracket(51, OPEN_ENDED_MAX, "51+"),
];

static U_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^U([0-9]+)$").expect("U_PREFIX is a valid regex pattern"));
static DIGIT_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)-([0-9]+)$").expect("DIGIT_RANGE is a valid regex pattern")
});
static UNDER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Under ([0-9]+)$").expect("UNDER_PREFIX is a valid regex pattern")
});
static PLUS_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\+$").expect("PLUS_SUFFIX is a valid regex pattern"));

fn brackets(format: AgeGroupFormat) -> &'static [Bracket] {
    match format {
        AgeGroupFormat::Standard => STANDARD_BRACKETS,
        AgeGroupFormat::Alternate => ALTERNATE_BRACKETS,
    }
}

impl Bracket {
    fn to_age_group(&self) -> AgeGroup {
        AgeGroup {
            min: self.min,
            max: self.max,
            label: self.label.to_string(),
        }
    }
}

/// The full table for `format`, in order.
pub fn age_groups(format: AgeGroupFormat) -> Vec<AgeGroup> {
    brackets(format).iter().map(Bracket::to_age_group).collect()
}

/// Whole years between `date_of_birth` and today (local clock).
pub fn calculate_age(date_of_birth: NaiveDate) -> i32 {
    calculate_age_on(date_of_birth, chrono::Local::now().date_naive())
}

/// Whole years between `date_of_birth` and `today`.
///
/// The year difference drops by one while today's month/day is still before
/// the birth month/day, so a 29 February birthday counts from 1 March in
/// common years.
pub fn calculate_age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// First bracket containing `age`.
pub fn get_age_group(age: i32, format: AgeGroupFormat) -> Option<AgeGroup> {
    brackets(format)
        .iter()
        .map(Bracket::to_age_group)
        .find(|g| g.contains(age))
}

/// Every bracket containing `age`.
///
/// Unlike [`get_age_group`] this does not stop at the first hit. The shipped
/// tables never overlap so the result has at most one entry today.
pub fn get_valid_age_groups(age: i32, format: AgeGroupFormat) -> Vec<AgeGroup> {
    brackets(format)
        .iter()
        .map(Bracket::to_age_group)
        .filter(|g| g.contains(age))
        .collect()
}

pub fn validate_age_for_age_group(age: i32, label: &str, format: AgeGroupFormat) -> AgeGroupCheck {
    let Some(group) = brackets(format)
        .iter()
        .find(|b| b.label == label)
        .map(Bracket::to_age_group)
    else {
        return AgeGroupCheck {
            is_valid: false,
            message: Some(format!("Invalid age group: {}", label)),
        };
    };

    if !group.contains(age) {
        return AgeGroupCheck {
            is_valid: false,
            message: Some(format!(
                "Age {} is not within the {} age group ({}-{})",
                age, group.label, group.min, group.max
            )),
        };
    }

    AgeGroupCheck {
        is_valid: true,
        message: None,
    }
}

/// Reads bounds out of a label. Rules are tried in order and the first match
/// wins: `U<N>`, `<A>-<B>`, `Under <N>`, `<N>+`.
pub fn parse_age_group(label: &str) -> Option<AgeRange> {
    if let Some(caps) = U_PREFIX.captures(label) {
        let max = caps[1].parse().ok()?;
        return Some(AgeRange { min: 0, max });
    }

    if let Some(caps) = DIGIT_RANGE.captures(label) {
        let min = caps[1].parse().ok()?;
        let max = caps[2].parse().ok()?;
        return Some(AgeRange { min, max });
    }

    if let Some(caps) = UNDER_PREFIX.captures(label) {
        let limit: i32 = caps[1].parse().ok()?;
        return Some(AgeRange {
            min: 0,
            max: limit - 1,
        });
    }

    if let Some(caps) = PLUS_SUFFIX.captures(label) {
        let min = caps[1].parse().ok()?;
        return Some(AgeRange {
            min,
            max: OPEN_ENDED_MAX,
        });
    }

    None
}
