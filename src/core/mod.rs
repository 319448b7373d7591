pub mod age_group;
pub mod email;
pub mod engine;
pub mod phone;
pub mod pipeline;
pub mod roster;

pub use crate::domain::model::{RosterReport, RosterSummary, StudentRecord};
pub use crate::domain::ports::{Pipeline, RosterSettings, Storage};
pub use crate::utils::error::Result;
