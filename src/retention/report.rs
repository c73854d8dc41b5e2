//! Orders report rows and marks the deck config groups for display.

use crate::models::ReportRow;
use serde::{Deserialize, Serialize};

/// One row of the ordered report with its display band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub row: ReportRow,
    /// Toggles once per deck config group, starting at `false`
    pub alternate: bool,
    /// First line of a deck config group
    pub group_start: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderedReport {
    pub lines: Vec<ReportLine>,
}

/// Consecutive lines sharing a deck config.
#[derive(Debug)]
pub struct ReportGroup<'a> {
    pub config_name: &'a str,
    pub lines: &'a [ReportLine],
}

impl OrderedReport {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.lines.iter().map(|line| &line.row)
    }

    pub fn groups(&self) -> Vec<ReportGroup<'_>> {
        let mut groups = Vec::new();
        let mut start = 0;

        for idx in 1..=self.lines.len() {
            if idx == self.lines.len() || self.lines[idx].group_start {
                groups.push(ReportGroup {
                    config_name: &self.lines[start].row.config_name,
                    lines: &self.lines[start..idx],
                });
                start = idx;
            }
        }
        groups
    }
}

/// Sorts rows by (config name, deck name) and assigns display bands.
///
/// The sort is stable and byte-wise: rows sharing both names keep the order
/// they were given in. Bands change on config name boundaries only.
pub fn build(mut rows: Vec<ReportRow>) -> OrderedReport {
    rows.sort_by(|a, b| {
        (a.config_name.as_str(), a.deck_name.as_str())
            .cmp(&(b.config_name.as_str(), b.deck_name.as_str()))
    });

    let mut lines = Vec::with_capacity(rows.len());
    let mut alternate = false;
    let mut previous: Option<String> = None;

    for row in rows {
        let group_start = previous.as_deref() != Some(row.config_name.as_str());
        if group_start && previous.is_some() {
            alternate = !alternate;
        }
        if group_start {
            previous = Some(row.config_name.clone());
        }
        lines.push(ReportLine {
            row,
            alternate,
            group_start,
        });
    }

    OrderedReport { lines }
}
