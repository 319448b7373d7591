use crate::domain::model::AgeGroupFormat;
use crate::domain::ports::{ColumnNames, RosterSettings};
use crate::utils::error::{RegError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

const VALID_OUTPUT_FORMATS: [&str; 2] = ["csv", "json"];
const VALID_AGE_GROUP_FORMATS: [&str; 2] = ["standard", "alternate"];

static ENV_VAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("ENV_VAR_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub roster: RosterSection,
    #[serde(default)]
    pub columns: ColumnConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSection {
    pub name: String,
    pub input_path: Option<String>,
    pub age_group_format: Option<String>,
    pub reference_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub age_group: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    pub normalize_phone: Option<bool>,
    pub compression: Option<CompressionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    pub filename: String,
}

fn default_formats() -> Vec<String> {
    vec!["csv".to_string()]
}

impl RosterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RegError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left
    /// as written so validation reports them.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_REGEX
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("roster.name", &self.roster.name)?;

        let input_path = validation::validate_required_field("roster.input_path", &self.roster.input_path)?;
        validation::validate_path("roster.input_path", input_path)?;
        validation::validate_path("output.output_path", &self.output.output_path)?;

        if let Some(format) = &self.roster.age_group_format {
            validation::validate_one_of(
                "roster.age_group_format",
                format.trim().to_ascii_lowercase().as_str(),
                &VALID_AGE_GROUP_FORMATS,
            )?;
        }

        if let Some(date) = &self.roster.reference_date {
            validation::validate_date("roster.reference_date", date)?;
        }

        if self.output.formats.is_empty() {
            return Err(RegError::ConfigValidationError {
                field: "output.formats".to_string(),
                message: "At least one output format is required".to_string(),
            });
        }
        for format in &self.output.formats {
            validation::validate_one_of("output.formats", format, &VALID_OUTPUT_FORMATS)?;
        }

        if let Some(compression) = &self.output.compression {
            if compression.enabled {
                validation::validate_file_extension(
                    "output.compression.filename",
                    &compression.filename,
                    &["zip"],
                )?;
            }
        }

        Ok(())
    }
}

impl RosterSettings for RosterConfig {
    fn roster_name(&self) -> &str {
        &self.roster.name
    }

    fn input_path(&self) -> &str {
        self.roster.input_path.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn age_group_format(&self) -> AgeGroupFormat {
        self.roster
            .age_group_format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    fn reference_date(&self) -> chrono::NaiveDate {
        self.roster
            .reference_date
            .as_deref()
            .and_then(|d| chrono::NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    fn columns(&self) -> ColumnNames {
        let defaults = ColumnNames::default();
        let c = &self.columns;
        ColumnNames {
            name: c.name.clone().unwrap_or(defaults.name),
            email: c.email.clone().unwrap_or(defaults.email),
            phone: c.phone.clone().unwrap_or(defaults.phone),
            date_of_birth: c.date_of_birth.clone().unwrap_or(defaults.date_of_birth),
            age_group: c.age_group.clone().unwrap_or(defaults.age_group),
        }
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn normalize_phone(&self) -> bool {
        self.output.normalize_phone.unwrap_or(true)
    }

    fn compression_filename(&self) -> Option<&str> {
        self.output
            .compression
            .as_ref()
            .filter(|c| c.enabled)
            .map(|c| c.filename.as_str())
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
