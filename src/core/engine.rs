use crate::core::{Pipeline, RosterSummary};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRun {
    pub output: String,
    pub summary: RosterSummary,
}

pub struct RosterEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RosterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RosterRun> {
        tracing::info!("Starting roster check");

        let records = self.pipeline.extract().await?;
        tracing::info!("Read {} roster rows", records.len());

        let report = self.pipeline.transform(records).await?;
        let summary = report.summary.clone();
        tracing::info!(
            valid = summary.valid,
            invalid = summary.invalid,
            "Checked {} rows",
            summary.total
        );

        let output = self.pipeline.load(report).await?;
        tracing::info!("Report saved to: {}", output);

        Ok(RosterRun { output, summary })
    }
}
