pub mod storage;
pub mod toml_config;

use crate::domain::model::{OutputFormat, Selector};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_paths, validate_non_empty_string, validate_path, Validate,
};

#[cfg(feature = "cli")]
use crate::utils::validation::validate_required_field;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// Fully resolved run settings handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: String,
    pub output_path: String,
    pub selector: Selector,
    pub format: OutputFormat,
    pub verbose: bool,
    pub log_json: bool,
}

impl Settings {
    pub fn new(input_path: &str, output_path: &str, selector: Selector) -> Self {
        Self {
            input_path: input_path.to_string(),
            output_path: output_path.to_string(),
            selector,
            format: OutputFormat::Text,
            verbose: false,
            log_json: false,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input.path", &self.input_path)?;
        validate_path("input.path", &self.input_path)?;
        validate_non_empty_string("output.path", &self.output_path)?;
        validate_path("output.path", &self.output_path)?;
        validate_distinct_paths(&self.input_path, &self.output_path)
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn selector(&self) -> Selector {
        self.selector
    }

    fn format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "roster-etl")]
#[command(about = "Validate, rank and report student admission records")]
pub struct CliConfig {
    /// Input file, one admission record per line
    #[arg(required_unless_present = "config")]
    pub input: Option<String>,

    /// Report file; receives a single ERROR line if any record is invalid
    #[arg(required_unless_present = "config")]
    pub output: Option<String>,

    /// 1 = domestic, 2 = international, 3 = both
    #[arg(required_unless_present = "config")]
    pub selector: Option<Selector>,

    /// Report format: text, csv or json
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// TOML configuration file; command-line values take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional TOML file under the command-line values and
    /// validates the result.
    pub fn into_settings(self) -> Result<Settings> {
        let file = match self.config.as_deref() {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let input_path = self.input.or_else(|| file.input_path().map(str::to_string));
        let output_path = self
            .output
            .or_else(|| file.output_path().map(str::to_string));
        let selector = match self.selector {
            Some(selector) => selector,
            None => file.selector()?.unwrap_or_default(),
        };
        let format = match self.format {
            Some(format) => format,
            None => file.format()?.unwrap_or_default(),
        };

        let settings = Settings {
            input_path: validate_required_field("input.path", &input_path)?.clone(),
            output_path: validate_required_field("output.path", &output_path)?.clone(),
            selector,
            format,
            verbose: self.verbose || file.verbose(),
            log_json: self.log_json || file.log_json(),
        };
        settings.validate()?;

        Ok(settings)
    }
}
