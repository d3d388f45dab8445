pub mod comparator;
pub mod etl;
pub mod grammar;
pub mod ingest;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod sorter;

pub use crate::domain::model::{InputLine, Record, RunSummary, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
