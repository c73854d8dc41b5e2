//! JSON export of retention reports.
//! Writes an OrderedReport to a file and reads one back.

use crate::error::Result;
use crate::retention::OrderedReport;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Exports a report to a pretty-printed JSON file at the specified path.
pub fn export_json_to_path(report: &OrderedReport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(report)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;

    info!("Report with {} rows exported to '{}'", report.lines.len(), path.display());
    Ok(())
}

/// Reads a previously exported report.
/// Fails if the file doesn't exist or contains invalid JSON.
pub fn import_json(path: impl AsRef<Path>) -> Result<OrderedReport> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let report: OrderedReport = serde_json::from_str(&contents)?;
    Ok(report)
}
