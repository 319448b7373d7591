use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Outcome of a detailed field check. `error_message` is empty iff `is_valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: message.into(),
        }
    }
}

/// A labelled, inclusive age bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroup {
    pub min: i32,
    pub max: i32,
    pub label: String,
}

impl AgeGroup {
    pub fn contains(&self, age: i32) -> bool {
        self.min <= age && age <= self.max
    }
}

/// Bounds recovered from an age-group label such as `U13` or `12-14`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: i32,
    pub max: i32,
}

/// Result of checking an age against a named bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroupCheck {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Which bracket table to resolve against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroupFormat {
    /// `U9`, `U11`, ... `U19`, then adult decades.
    #[default]
    Standard,
    /// `Under 12`, `12-14`, `15-17`, then adult decades.
    Alternate,
}

impl AgeGroupFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroupFormat::Standard => "standard",
            AgeGroupFormat::Alternate => "alternate",
        }
    }
}

impl fmt::Display for AgeGroupFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroupFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(AgeGroupFormat::Standard),
            "alternate" => Ok(AgeGroupFormat::Alternate),
            other => Err(format!("unknown age group format: {}", other)),
        }
    }
}

/// One data row of an uploaded roster, keyed by CSV header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub fields: HashMap<String, String>,
}

impl StudentRecord {
    pub fn field(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowReport {
    pub row: usize,
    pub name: String,
    pub email: ValidationResult,
    pub phone: ValidationResult,
    pub normalized_phone: Option<String>,
    pub age: Option<i32>,
    pub age_group: Option<String>,
    pub age_group_error: Option<String>,
}

impl RowReport {
    pub fn is_valid(&self) -> bool {
        self.email.is_valid && self.phone.is_valid && self.age_group_error.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub email_failures: usize,
    pub phone_failures: usize,
    pub age_group_failures: usize,
}

impl RosterSummary {
    pub fn from_rows(rows: &[RowReport]) -> Self {
        let mut summary = Self {
            total: rows.len(),
            ..Self::default()
        };

        for row in rows {
            if row.is_valid() {
                summary.valid += 1;
            } else {
                summary.invalid += 1;
            }
            if !row.email.is_valid {
                summary.email_failures += 1;
            }
            if !row.phone.is_valid {
                summary.phone_failures += 1;
            }
            if row.age_group_error.is_some() {
                summary.age_group_failures += 1;
            }
        }

        summary
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterReport {
    pub roster: String,
    pub age_group_format: AgeGroupFormat,
    pub reference_date: chrono::NaiveDate,
    pub summary: RosterSummary,
    pub rows: Vec<RowReport>,
}
