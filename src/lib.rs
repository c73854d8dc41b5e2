pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod retention;

pub use database::CollectionSource;
pub use error::{Result, RetentionError};
pub use models::{ReportRow, ReviewEvent};
pub use retention::{OrderedReport, build_retention_report};
