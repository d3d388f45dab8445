pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{storage::LocalStorage, Settings};
pub use core::{
    comparator::compare_records,
    etl::RosterEngine,
    parser::parse_record,
    pipeline::RosterPipeline,
    render::{render_line, render_report},
    sorter::{merge_sort_by, sort_records},
};
pub use domain::model::{
    Applicant, BirthDate, Gpa, OutputFormat, Record, RunSummary, Selector, StudentType, ToeflScore,
};
pub use utils::error::{ErrorKind, Field, RecordError, Result, RosterError};
