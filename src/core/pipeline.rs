use crate::core::roster::RowChecker;
use crate::core::{Pipeline, RosterReport, RosterSettings, RosterSummary, StudentRecord, Storage};
use crate::domain::model::RowReport;
use crate::utils::error::{RegError, Result};
use std::collections::HashMap;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const CSV_REPORT: &str = "roster_report.csv";
pub const JSON_REPORT: &str = "roster_report.json";

const CSV_HEADER: [&str; 11] = [
    "row",
    "name",
    "email_valid",
    "email_error",
    "phone_valid",
    "phone_error",
    "normalized_phone",
    "age",
    "age_group",
    "age_group_error",
    "valid",
];

pub struct RosterPipeline<S: Storage, C: RosterSettings> {
    storage: S,
    config: C,
}

impl<S: Storage, C: RosterSettings> RosterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, name: &str) -> String {
        format!("{}/{}", self.config.output_path().trim_end_matches('/'), name)
    }

    fn render(&self, format: &str, report: &RosterReport) -> Result<Vec<u8>> {
        match format {
            "csv" => render_csv(&report.rows),
            "json" => Ok(serde_json::to_vec_pretty(report)?),
            other => Err(RegError::ProcessingError {
                message: format!("Unsupported output format: {}", other),
            }),
        }
    }
}

fn render_csv(rows: &[RowReport]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for row in rows {
        writer.write_record([
            row.row.to_string(),
            row.name.clone(),
            row.email.is_valid.to_string(),
            row.email.error_message.clone(),
            row.phone.is_valid.to_string(),
            row.phone.error_message.clone(),
            row.normalized_phone.clone().unwrap_or_default(),
            row.age.map(|a| a.to_string()).unwrap_or_default(),
            row.age_group.clone().unwrap_or_default(),
            row.age_group_error.clone().unwrap_or_default(),
            row.is_valid().to_string(),
        ])?;
    }

    writer.into_inner().map_err(|e| RegError::ProcessingError {
        message: format!("Failed to flush CSV report: {}", e),
    })
}

fn report_filename(format: &str) -> &'static str {
    if format == "json" {
        JSON_REPORT
    } else {
        CSV_REPORT
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: RosterSettings> Pipeline for RosterPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<StudentRecord>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading roster from: {}", input_path);

        let data = self.storage.read_file(input_path).await?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_slice());

        let headers = reader.headers()?.clone();
        let columns = self.config.columns();
        for required in [&columns.email, &columns.phone] {
            if !headers.iter().any(|h| h == required.as_str()) {
                return Err(RegError::ProcessingError {
                    message: format!(
                        "Roster '{}' has no '{}' column (found: {})",
                        input_path,
                        required,
                        headers.iter().collect::<Vec<_>>().join(", ")
                    ),
                });
            }
        }

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            let fields: HashMap<String, String> = headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect();
            records.push(StudentRecord {
                row: index + 1,
                fields,
            });
        }

        if records.is_empty() {
            tracing::warn!("Roster '{}' has a header but no rows", input_path);
        }

        Ok(records)
    }

    async fn transform(&self, records: Vec<StudentRecord>) -> Result<RosterReport> {
        let format = self.config.age_group_format();
        let reference_date = self.config.reference_date();
        tracing::debug!(
            "Checking {} rows against the {} table as of {}",
            records.len(),
            format,
            reference_date
        );

        let checker = RowChecker::new(
            self.config.columns(),
            format,
            reference_date,
            self.config.normalize_phone(),
        );

        let rows: Vec<RowReport> = records
            .iter()
            .map(|record| {
                let report = checker.check(record);
                if !report.is_valid() {
                    tracing::trace!("Row {} failed checks", report.row);
                }
                report
            })
            .collect();

        Ok(RosterReport {
            roster: self.config.roster_name().to_string(),
            age_group_format: format,
            reference_date,
            summary: RosterSummary::from_rows(&rows),
            rows,
        })
    }

    async fn load(&self, report: RosterReport) -> Result<String> {
        let formats = self.config.output_formats();

        if let Some(archive_name) = self.config.compression_filename() {
            tracing::debug!("Creating ZIP archive with {} reports", formats.len());

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for format in formats {
                    let body = self.render(format, &report)?;
                    zip.start_file::<_, ()>(report_filename(format), FileOptions::default())?;
                    zip.write_all(&body)?;
                }
                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            let archive_path = self.output_file(archive_name);
            tracing::debug!("Writing ZIP archive ({} bytes) to {}", zip_data.len(), archive_path);
            self.storage.write_file(&archive_path, &zip_data).await?;
            return Ok(archive_path);
        }

        let mut written = Vec::with_capacity(formats.len());
        for format in formats {
            let body = self.render(format, &report)?;
            let path = self.output_file(report_filename(format));
            self.storage.write_file(&path, &body).await?;
            written.push(path);
        }

        Ok(written.join(", "))
    }
}
