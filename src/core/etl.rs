use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;
use std::time::Instant;

pub struct RosterEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RosterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Runs extract, transform and load. On failure the pipeline's output is
    /// replaced with a single error report before the error is returned.
    pub fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();

        match self.execute() {
            Ok(summary) => {
                tracing::info!(
                    "Run finished in {:.2?}: {} records ({} domestic, {} international), {} written to {}",
                    started.elapsed(),
                    summary.parsed,
                    summary.domestic,
                    summary.international,
                    summary.rendered,
                    summary.output_path
                );
                Ok(summary)
            }
            Err(error) => {
                tracing::error!("Run aborted: {}", error);
                if let Err(report_error) = self.pipeline.report_failure(&error) {
                    tracing::error!("Could not write failure report: {}", report_error);
                }
                Err(error)
            }
        }
    }

    fn execute(&self) -> Result<RunSummary> {
        tracing::info!("Extracting input lines...");
        let lines = self.pipeline.extract()?;
        tracing::info!("Extracted {} lines", lines.len());

        tracing::info!("Validating and sorting records...");
        let result = self.pipeline.transform(lines)?;
        tracing::info!(
            "Sorted {} records, {} selected for output",
            result.sorted_records.len(),
            result.rendered_count
        );

        tracing::info!("Writing report...");
        self.pipeline.load(result)
    }
}
