use crate::core::ingest::decode_input;
use crate::core::parser::parse_records;
use crate::core::render::render_report;
use crate::core::sorter::sort_records;
use crate::core::{ConfigProvider, InputLine, Pipeline, RunSummary, Storage, TransformResult};
use crate::utils::error::{Result, RosterError};

/// Reads the input through `storage`, validates and sorts every record, and
/// writes the report selected by `config`.
pub struct RosterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RosterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for RosterPipeline<S, C> {
    fn extract(&self) -> Result<Vec<InputLine>> {
        let path = self.config.input_path();
        tracing::debug!("Reading input from: {}", path);

        let bytes = self.storage.read_file(path).map_err(|e| match e {
            RosterError::IoError(source) => RosterError::InputUnavailable {
                path: path.to_string(),
                source,
            },
            other => other,
        })?;

        decode_input(path, &bytes)
    }

    fn transform(&self, lines: Vec<InputLine>) -> Result<TransformResult> {
        let mut records = parse_records(lines.iter().map(|l| (l.number, l.text.as_str())))?;
        sort_records(&mut records);

        let selector = self.config.selector();
        let format = self.config.format();
        tracing::debug!("Rendering {} report for selector {}", format, selector);

        let rendered = render_report(&records, selector, format)?;
        let rendered_count = records.iter().filter(|r| selector.includes(r)).count();

        Ok(TransformResult {
            sorted_records: records,
            rendered,
            rendered_count,
        })
    }

    fn load(&self, result: TransformResult) -> Result<RunSummary> {
        let output_path = self.config.output_path();
        tracing::debug!(
            "Writing report ({} bytes) to: {}",
            result.rendered.len(),
            output_path
        );
        self.storage
            .write_file(output_path, result.rendered.as_bytes())?;

        let domestic = result
            .sorted_records
            .iter()
            .filter(|r| r.is_domestic())
            .count();

        Ok(RunSummary {
            output_path: output_path.to_string(),
            parsed: result.sorted_records.len(),
            domestic,
            international: result.sorted_records.len() - domestic,
            rendered: result.rendered_count,
        })
    }

    fn report_failure(&self, error: &RosterError) -> Result<()> {
        let line = format!("ERROR: {}\n", error.report_message());
        self.storage
            .write_file(self.config.output_path(), line.as_bytes())
    }
}
