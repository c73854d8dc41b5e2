//! HTML table rendering of retention reports.
//!
//! Produces a self-contained fragment (stylesheet + table). Rows carry an
//! `alternate` or `normal` class per deck config band, and the retention cell
//! is marked `under` when the group misses its target.

use crate::error::Result;
use crate::retention::OrderedReport;
use std::fs;
use std::path::Path;
use tracing::info;

const STYLE: &str = "
body {
    margin: 0;
}
table {
    width: 100%;
    table-layout: fixed;
    box-sizing: border-box;
    border-collapse: collapse;
}
td, th {
    overflow-wrap: break-word;
}
.alternate {
    background-color: #f0f0f0;
}
.night-mode .alternate {
    background-color: #555555;
}
.under {
    color: red;
    font-weight: bold;
}
";

const HEADERS: [&str; 7] = [
    "Config Name",
    "Deck Name",
    "Note Type",
    "Card Type",
    "Total",
    "Retention",
    "Desired Retention",
];

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn render_table(report: &OrderedReport) -> String {
    let mut html = String::from("<table border=\"1\" cellpadding=\"5\" cellspacing=\"0\">\n<thead>\n<tr>");
    for header in HEADERS {
        html.push_str(&format!("<th>{}</th>", header));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for line in &report.lines {
        let row = &line.row;
        let desired = row
            .desired_retention
            .map(|d| d.to_string())
            .unwrap_or_default();

        html.push_str(&format!(
            "<tr class=\"{band}\"><td>{config}</td><td>{deck}</td><td>{note_type}</td><td>{card_type}</td>\
             <td>{total}</td><td class=\"{check}\">{retention}</td><td>{desired}</td></tr>\n",
            band = if line.alternate { "alternate" } else { "normal" },
            config = html_escape(&row.config_name),
            deck = html_escape(&row.deck_name),
            note_type = html_escape(&row.note_type_name),
            card_type = html_escape(&row.card_type_name),
            total = row.total,
            check = if row.under_target { "under" } else { "over" },
            retention = row.retention,
            desired = desired,
        ));
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

/// Stylesheet followed by the table, ready to drop into a web view.
pub fn render_document(report: &OrderedReport) -> String {
    format!("<style>{}</style>\n{}", STYLE, render_table(report))
}

pub fn export_html_to_path(report: &OrderedReport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_document(report))?;
    info!("Report with {} rows exported to '{}'", report.lines.len(), path.display());
    Ok(())
}
