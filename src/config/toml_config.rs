use crate::domain::model::{OutputFormat, Selector};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub selector: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl TomlConfig {
    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration text after expanding `${VAR}` references.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RosterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as written so validation reports them verbatim.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn input_path(&self) -> Option<&str> {
        self.input.as_ref().map(|input| input.path.as_str())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|output| output.path.as_deref())
    }

    pub fn selector(&self) -> Result<Option<Selector>> {
        let Some(value) = self.output.as_ref().and_then(|o| o.selector.as_deref()) else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|reason| RosterError::InvalidConfigValueError {
                field: "output.selector".to_string(),
                value: value.to_string(),
                reason,
            })
    }

    pub fn format(&self) -> Result<Option<OutputFormat>> {
        let Some(value) = self.output.as_ref().and_then(|o| o.format.as_deref()) else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|reason| RosterError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: value.to_string(),
                reason,
            })
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.verbose)
            .unwrap_or(false)
    }

    pub fn log_json(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.json)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.input_path() {
            validate_path("input.path", path)?;
        }
        if let Some(path) = self.output_path() {
            validate_path("output.path", path)?;
        }
        self.selector()?;
        self.format()?;
        Ok(())
    }
}
