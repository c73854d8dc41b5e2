//! Retention report pipeline.
//!
//! review log -> [`classifier`] -> [`aggregator`] -> [`joiner`] -> [`report`]
//!
//! Each run reads a fresh snapshot from the collection store and keeps no
//! state between runs.

pub mod aggregator;
pub mod classifier;
pub mod joiner;
pub mod report;

pub use aggregator::{Aggregation, aggregate};
pub use classifier::{Classification, classify};
pub use joiner::enrich;
pub use report::{OrderedReport, ReportGroup, ReportLine, build};

use crate::database::CollectionSource;
use crate::error::Result;
use tracing::info;

/// Runs the whole pipeline against `source`.
///
/// Fails on the first group whose metadata cannot be resolved; no partial
/// report is produced.
pub fn build_retention_report(source: &dyn CollectionSource) -> Result<OrderedReport> {
    let events = source.review_events()?;
    let aggregation = aggregate(&events, source)?;

    let rows = aggregation
        .groups()
        .iter()
        .map(|(key, counters)| enrich(key, counters, source))
        .collect::<Result<Vec<_>>>()?;

    let report = build(rows);
    info!(
        "Built retention report: {} reviews, {} rows, {} deck configs",
        events.len(),
        report.lines.len(),
        report.groups().len()
    );
    Ok(report)
}
