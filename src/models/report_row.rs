//! Final per-group output of the retention pipeline.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub config_name: String,
    pub deck_name: String,
    pub note_type_name: String,
    pub card_type_name: String,
    pub total: u64,
    /// Observed retention rounded to 3 decimals
    pub retention: f64,
    /// Configured target as stored; `None` when the preset has none
    pub desired_retention: Option<f64>,
    /// Computed from the unrounded retention
    pub under_target: bool,
}
