use crate::domain::model::{AgeGroupFormat, RosterReport, StudentRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Column names used to pull each checked field out of a roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub age_group: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            email: "email".to_string(),
            phone: "phone".to_string(),
            date_of_birth: "date_of_birth".to_string(),
            age_group: "age_group".to_string(),
        }
    }
}

pub trait RosterSettings: Send + Sync {
    fn roster_name(&self) -> &str;
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn age_group_format(&self) -> AgeGroupFormat;
    fn reference_date(&self) -> chrono::NaiveDate;
    fn columns(&self) -> ColumnNames;
    fn output_formats(&self) -> &[String];
    fn normalize_phone(&self) -> bool;
    /// Archive name when reports are bundled, `None` to write them loose.
    fn compression_filename(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<StudentRecord>>;
    async fn transform(&self, records: Vec<StudentRecord>) -> Result<RosterReport>;
    async fn load(&self, report: RosterReport) -> Result<String>;
}
