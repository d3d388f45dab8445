use crate::domain::model::{InputLine, OutputFormat, RunSummary, Selector, TransformResult};
use crate::utils::error::{Result, RosterError};

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn selector(&self) -> Selector;
    fn format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<InputLine>>;
    fn transform(&self, lines: Vec<InputLine>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<RunSummary>;
    /// Replaces any report with the single failure line for `error`.
    fn report_failure(&self, error: &RosterError) -> Result<()>;
}
