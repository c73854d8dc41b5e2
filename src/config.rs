//! Command line options and logging setup for the `retention-table` binary.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "retention-table")]
#[command(about = "Observed vs. desired retention per deck, note type and card type")]
#[command(version)]
pub struct Cli {
    /// Collection file to read. A file picker opens when omitted.
    pub collection: Option<PathBuf>,

    /// Write the report as JSON and exit without opening a window
    #[arg(long, requires = "collection")]
    pub export_json: Option<PathBuf>,

    /// Write the report as an HTML table and exit without opening a window
    #[arg(long, requires = "collection")]
    pub export_html: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// True when an export was requested, in which case no window is shown
    pub fn is_headless(&self) -> bool {
        self.export_json.is_some() || self.export_html.is_some()
    }

    /// `RUST_LOG` wins over `--log-level`
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("retention_table={}", self.log_level)))
    }
}

pub fn init_logging(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_target(false)
        .init();
}
