use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Roster processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RegError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegError::ConfigValidationError { .. }
            | RegError::InvalidConfigValueError { .. }
            | RegError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RegError::CsvError(_) => ErrorCategory::Input,
            RegError::ZipError(_) | RegError::SerializationError(_) => ErrorCategory::Output,
            RegError::IoError(_) | RegError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RegError::IoError(e) => format!("Could not read or write a file: {}", e),
            RegError::CsvError(e) => format!("The roster file is not valid CSV: {}", e),
            RegError::ZipError(e) => format!("Could not build the report archive: {}", e),
            RegError::SerializationError(e) => format!("Could not write the JSON report: {}", e),
            RegError::MissingConfigError { field } => {
                format!("The setting '{}' is required", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the roster TOML file against the documented keys and values"
            }
            ErrorCategory::Input => {
                "Make sure the roster has a header row and consistent column counts"
            }
            ErrorCategory::Output => "Check that the output directory is writable",
            ErrorCategory::Processing => {
                "Check that the input path exists and the column names match the header"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RegError>;
