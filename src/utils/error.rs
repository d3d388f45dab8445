use std::fmt;
use thiserror::Error;

/// Position of a whitespace-delimited field within an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    BirthDate,
    Gpa,
    StudentType,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::BirthDate => "date",
            Field::Gpa => "GPA",
            Field::StudentType => "type",
        };
        f.write_str(name)
    }
}

/// Fieldless discriminant of [`RecordError`], convenient for matching and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingField,
    InvalidMonth,
    InvalidDay,
    InvalidYear,
    DateMustBeInteger,
    InvalidGpa,
    GpaTooManyDecimals,
    InvalidType,
    InvalidToefl,
    ToeflNotAllowedForDomestic,
    ToeflRequiredForInternational,
    UnexpectedField,
}

/// Why a single input line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Missing {0}")]
    MissingField(Field),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    #[error("Year must be between 1950 and 2010 (inclusive): {0}")]
    InvalidYear(String),

    #[error("Date cannot contain a float: {0}")]
    DateMustBeInteger(String),

    #[error("Invalid GPA {token}: {reason}")]
    InvalidGpa { token: String, reason: &'static str },

    #[error("Too many decimal places in GPA: {0}")]
    GpaTooManyDecimals(String),

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("TOEFL must be an int between 0 and 120: {0}")]
    InvalidToefl(String),

    #[error("Domestic students cannot have a TOEFL")]
    ToeflNotAllowedForDomestic,

    #[error("Missing TOEFL")]
    ToeflRequiredForInternational,

    #[error("Unexpected field after TOEFL score: {0}")]
    UnexpectedField(String),
}

impl RecordError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecordError::MissingField(_) => ErrorKind::MissingField,
            RecordError::InvalidMonth(_) => ErrorKind::InvalidMonth,
            RecordError::InvalidDay(_) => ErrorKind::InvalidDay,
            RecordError::InvalidYear(_) => ErrorKind::InvalidYear,
            RecordError::DateMustBeInteger(_) => ErrorKind::DateMustBeInteger,
            RecordError::InvalidGpa { .. } => ErrorKind::InvalidGpa,
            RecordError::GpaTooManyDecimals(_) => ErrorKind::GpaTooManyDecimals,
            RecordError::InvalidType(_) => ErrorKind::InvalidType,
            RecordError::InvalidToefl(_) => ErrorKind::InvalidToefl,
            RecordError::ToeflNotAllowedForDomestic => ErrorKind::ToeflNotAllowedForDomestic,
            RecordError::ToeflRequiredForInternational => {
                ErrorKind::ToeflRequiredForInternational
            }
            RecordError::UnexpectedField(_) => ErrorKind::UnexpectedField,
        }
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Cannot open input file {path}: {source}")]
    InputUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty input file: {path}")]
    EmptyInput { path: String },

    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: RecordError,
    },
}

impl RosterError {
    /// Text written after `ERROR: ` when a run fails.
    pub fn report_message(&self) -> String {
        match self {
            RosterError::Record { source, .. } => source.to_string(),
            RosterError::InputUnavailable { .. } => "Cannot open input file".to_string(),
            RosterError::EmptyInput { .. } => "Empty input file".to_string(),
            other => other.to_string(),
        }
    }

    pub fn record_error(&self) -> Option<&RecordError> {
        match self {
            RosterError::Record { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::Record { line, source } => {
                format!("Input rejected at line {}: {}", line, source)
            }
            RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. }
            | RosterError::MissingConfigError { .. } => format!("Configuration problem: {}", self),
            other => other.to_string(),
        }
    }

    /// Process exit code: 1 for rejected input, 2 for configuration, 3 for I/O.
    pub fn exit_code(&self) -> i32 {
        match self {
            RosterError::Record { .. }
            | RosterError::EmptyInput { .. }
            | RosterError::InputUnavailable { .. } => 1,
            RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. }
            | RosterError::MissingConfigError { .. } => 2,
            RosterError::IoError(_)
            | RosterError::CsvError(_)
            | RosterError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
