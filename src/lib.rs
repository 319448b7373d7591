pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::RosterConfig};
pub use crate::core::{age_group, email, phone};
pub use crate::core::{engine::RosterEngine, pipeline::RosterPipeline};
pub use domain::model::{AgeGroup, AgeGroupCheck, AgeGroupFormat, AgeRange, ValidationResult};
pub use utils::error::{RegError, Result};
