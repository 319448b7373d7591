use crate::core::{age_group, email, phone};
use crate::domain::model::{AgeGroupFormat, RowReport, StudentRecord};
use crate::domain::ports::ColumnNames;
use chrono::NaiveDate;

pub const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// Applies the field validators to one roster row.
#[derive(Debug, Clone)]
pub struct RowChecker {
    columns: ColumnNames,
    format: AgeGroupFormat,
    reference_date: NaiveDate,
    normalize_phone: bool,
}

impl RowChecker {
    pub fn new(
        columns: ColumnNames,
        format: AgeGroupFormat,
        reference_date: NaiveDate,
        normalize_phone: bool,
    ) -> Self {
        Self {
            columns,
            format,
            reference_date,
            normalize_phone,
        }
    }

    pub fn check(&self, record: &StudentRecord) -> RowReport {
        let raw_email = record.field(&self.columns.email).unwrap_or_default();
        let raw_phone = record.field(&self.columns.phone).unwrap_or_default();

        let email = email::detailed_validate(raw_email);
        let phone = phone::detailed_validate(raw_phone);
        let normalized_phone = (phone.is_valid && self.normalize_phone).then(|| phone::normalize(raw_phone));

        let declared_group = record
            .field(&self.columns.age_group)
            .map(str::trim)
            .filter(|g| !g.is_empty());
        let date_of_birth = record
            .field(&self.columns.date_of_birth)
            .map(str::trim)
            .filter(|d| !d.is_empty());

        let (age, age_group, age_group_error) = self.check_age(date_of_birth, declared_group);

        RowReport {
            row: record.row,
            name: record
                .field(&self.columns.name)
                .unwrap_or_default()
                .trim()
                .to_string(),
            email,
            phone,
            normalized_phone,
            age,
            age_group,
            age_group_error,
        }
    }

    fn check_age(
        &self,
        date_of_birth: Option<&str>,
        declared_group: Option<&str>,
    ) -> (Option<i32>, Option<String>, Option<String>) {
        let Some(raw_dob) = date_of_birth else {
            let error = declared_group.map(|group| {
                format!("Date of birth is required to check the {} age group", group)
            });
            return (None, declared_group.map(str::to_string), error);
        };

        let dob = match NaiveDate::parse_from_str(raw_dob, DATE_OF_BIRTH_FORMAT) {
            Ok(dob) => dob,
            Err(_) => {
                return (
                    None,
                    declared_group.map(str::to_string),
                    Some(format!("Invalid date of birth: {}", raw_dob)),
                );
            }
        };

        let age = age_group::calculate_age_on(dob, self.reference_date);

        match declared_group {
            Some(group) => {
                let check = age_group::validate_age_for_age_group(age, group, self.format);
                (Some(age), Some(group.to_string()), check.message)
            }
            None => match age_group::get_age_group(age, self.format) {
                Some(resolved) => (Some(age), Some(resolved.label), None),
                None => (
                    Some(age),
                    None,
                    Some(format!("No {} age group covers age {}", self.format, age)),
                ),
            },
        }
    }
}
