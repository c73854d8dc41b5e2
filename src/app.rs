//! Report window.
//! Shows the retention table for one collection and handles refresh and export.

use chrono::Local;
use eframe::egui::{self, Color32, RichText};
use retention_table::database::db::SqliteCollection;
use retention_table::export::html::export_html_to_path;
use retention_table::export::json::{export_json_to_path, import_json};
use retention_table::{OrderedReport, build_retention_report};
use std::path::PathBuf;
use tracing::{error, info};

const HEADERS: [&str; 7] = [
    "Config Name",
    "Deck Name",
    "Note Type",
    "Card Type",
    "Total",
    "Retention",
    "Desired Retention",
];

/// Export target chosen in the toolbar
#[derive(Clone, Copy)]
enum ExportFormat {
    Json,
    Html,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }
}

/// Main application state
pub struct RetentionApp {
    collection_path: PathBuf,
    report: Option<OrderedReport>,
    generated_at: String,

    show_result_dialog: bool,
    result_message: String,
}

impl eframe::App for RetentionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_report_screen(ctx);

        if self.show_result_dialog {
            egui::Window::new("Retention table")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_result_dialog = false;
                    }
                });
        }
    }
}

impl RetentionApp {
    /// Creates the window state and builds the first report
    pub fn new(collection_path: PathBuf) -> Self {
        let mut app = Self {
            collection_path,
            report: None,
            generated_at: String::new(),
            show_result_dialog: false,
            result_message: String::new(),
        };
        app.refresh();
        app
    }

    /// Rebuilds the report from a fresh snapshot of the collection
    fn refresh(&mut self) {
        let result = SqliteCollection::open(&self.collection_path)
            .and_then(|collection| build_retention_report(&collection));

        match result {
            Ok(report) => {
                self.generated_at = Local::now().format("%Y-%m-%d %H:%M").to_string();
                self.report = Some(report);
            }
            Err(e) => {
                error!("Failed to build report: {}", e);
                self.report = None;
                self.result_message = format!("Failed to build report: {}", e);
                self.show_result_dialog = true;
            }
        }
    }

    /// Renders the toolbar and the retention grid
    fn render_report_screen(&mut self, ctx: &egui::Context) {
        let mut action_refresh = false;
        let mut action_export: Option<ExportFormat> = None;
        let mut action_open = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{}", self.collection_path.display()));
                if !self.generated_at.is_empty() {
                    ui.label(format!("({})", self.generated_at));
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Refresh").clicked() {
                    action_refresh = true;
                }
                if ui.button("Open report").clicked() {
                    action_open = true;
                }
                let has_report = self.report.is_some();
                if ui.add_enabled(has_report, egui::Button::new("Export JSON")).clicked() {
                    action_export = Some(ExportFormat::Json);
                }
                if ui.add_enabled(has_report, egui::Button::new("Export HTML")).clicked() {
                    action_export = Some(ExportFormat::Html);
                }
            });

            ui.separator();

            match &self.report {
                Some(report) if report.is_empty() => {
                    ui.label("No reviews found in this collection");
                }
                Some(report) => render_grid(ui, report),
                None => {
                    ui.label("No report loaded");
                }
            }
        });

        // Execute deferred actions
        if action_refresh {
            self.refresh();
        }
        if let Some(format) = action_export {
            self.handle_export(format);
        }
        if action_open {
            self.handle_open();
        }
    }

    /// Loads a previously exported JSON report in place of the live one.
    /// Refresh goes back to the collection.
    fn handle_open(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        match import_json(&path) {
            Ok(report) => {
                info!("Opened report {}", path.display());
                self.generated_at = format!("from {}", path.display());
                self.report = Some(report);
            }
            Err(e) => {
                self.result_message = format!("Could not open report: {}", e);
                self.show_result_dialog = true;
            }
        }
    }

    /// Handles report export through a save dialog
    fn handle_export(&mut self, format: ExportFormat) {
        let Some(report) = &self.report else {
            return;
        };

        let extension = format.extension();
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!(
                "retention-{}.{}",
                Local::now().format("%Y-%m-%d"),
                extension
            ))
            .add_filter(extension, &[extension])
            .save_file()
        else {
            return;
        };

        let result = match format {
            ExportFormat::Json => export_json_to_path(report, &path),
            ExportFormat::Html => export_html_to_path(report, &path),
        };

        self.result_message = match result {
            Ok(()) => {
                info!("Exported report to {}", path.display());
                format!("Report exported to {}", path.display())
            }
            Err(e) => format!("Export failed: {}", e),
        };
        self.show_result_dialog = true;
    }
}

fn render_grid(ui: &mut egui::Ui, report: &OrderedReport) {
    let band_color = ui.visuals().faint_bg_color;

    egui::ScrollArea::both().show(ui, |ui| {
        egui::Grid::new("retention_grid")
            .num_columns(HEADERS.len())
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for header in HEADERS {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                for line in &report.lines {
                    let row = &line.row;
                    let cell = |text: String| {
                        let text = RichText::new(text);
                        if line.alternate {
                            text.background_color(band_color)
                        } else {
                            text
                        }
                    };

                    ui.label(cell(row.config_name.clone()));
                    ui.label(cell(row.deck_name.clone()));
                    ui.label(cell(row.note_type_name.clone()));
                    ui.label(cell(row.card_type_name.clone()));
                    ui.label(cell(row.total.to_string()));

                    let retention = cell(row.retention.to_string());
                    if row.under_target {
                        ui.label(retention.color(Color32::RED).strong());
                    } else {
                        ui.label(retention);
                    }

                    ui.label(cell(
                        row.desired_retention
                            .map(|d| d.to_string())
                            .unwrap_or_default(),
                    ));
                    ui.end_row();
                }
            });
    });
}
