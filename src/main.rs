mod app;

use app::RetentionApp;
use clap::Parser;
use retention_table::build_retention_report;
use retention_table::config::{Cli, init_logging};
use retention_table::database::db::SqliteCollection;
use retention_table::export::html::export_html_to_path;
use retention_table::export::json::export_json_to_path;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli);

    let collection_path = match cli.collection.clone() {
        Some(path) => path,
        None => match rfd::FileDialog::new()
            .add_filter("Collection", &["sqlite3", "db"])
            .pick_file()
        {
            Some(path) => path,
            None => {
                warn!("No collection selected");
                return Ok(());
            }
        },
    };

    if cli.is_headless() {
        let collection = SqliteCollection::open(&collection_path)?;
        let report = build_retention_report(&collection)?;

        if let Some(path) = &cli.export_json {
            export_json_to_path(&report, path)?;
        }
        if let Some(path) = &cli.export_html {
            export_html_to_path(&report, path)?;
        }
        return Ok(());
    }

    info!("Opening report window for {}", collection_path.display());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Retention table")
            .with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Retention table",
        options,
        Box::new(|_cc| Ok(Box::new(RetentionApp::new(collection_path)))),
    )?;
    Ok(())
}
