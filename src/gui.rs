// FirmLens - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and manages the fetch lifecycle.

use crate::app::fetch::FetchManager;
use crate::app::state::AppState;
use crate::ui;

/// The FirmLens application.
pub struct FirmLensApp {
    pub state: AppState,
    pub fetch_manager: FetchManager,
}

impl FirmLensApp {
    /// Create a new application instance with the given state.
    ///
    /// The startup fetch is queued in `state.pending_fetch` and started on
    /// the first frame.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            fetch_manager: FetchManager::new(),
        }
    }

    /// Export the filtered set via a save dialog, reporting the outcome in
    /// the status bar.
    fn export_filtered(&mut self, format: ExportFormat) {
        let (filter_name, extension, default_name) = match format {
            ExportFormat::Csv => ("CSV", "csv", "companies.csv"),
            ExportFormat::Json => ("JSON", "json", "companies.json"),
        };

        let Some(dest) = rfd::FileDialog::new()
            .add_filter(filter_name, &[extension])
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };

        let records = self.state.directory.filtered_records();
        match std::fs::File::create(&dest) {
            Ok(file) => {
                let result = match format {
                    ExportFormat::Csv => crate::core::export::export_csv(&records, file, &dest),
                    ExportFormat::Json => crate::core::export::export_json(&records, file, &dest),
                };
                match result {
                    Ok(n) => {
                        self.state.status_message =
                            format!("Exported {n} companies to {filter_name}.");
                    }
                    Err(e) => {
                        self.state.status_message = format!("{filter_name} export failed: {e}");
                    }
                }
            }
            Err(e) => {
                self.state.status_message = format!("Cannot create file: {e}");
            }
        }
    }
}

#[derive(Clone, Copy)]
enum ExportFormat {
    Csv,
    Json,
}

impl eframe::App for FirmLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for fetch progress
        let messages = self.fetch_manager.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            self.state.apply_fetch_progress(msg);
        }
        // Repaint while the fetch is active so the completion appears promptly.
        if had_messages || self.state.phase.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // pending_fetch: set at startup and by File > Reload.
        if let Some(endpoint) = self.state.pending_fetch.take() {
            self.fetch_manager.start_fetch(endpoint);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Reload").clicked() {
                        self.state.request_reload();
                        ui.close_menu();
                    }
                    ui.separator();
                    // Export -- enabled only when there are filtered records
                    let has_records = self.state.directory.filtered_len() > 0;
                    let mut export: Option<ExportFormat> = None;
                    ui.add_enabled_ui(has_records, |ui| {
                        if ui.button("Export CSV...").clicked() {
                            export = Some(ExportFormat::Csv);
                            ui.close_menu();
                        }
                        if ui.button("Export JSON...").clicked() {
                            export = Some(ExportFormat::Json);
                            ui.close_menu();
                        }
                    });
                    if let Some(format) = export {
                        self.export_filtered(format);
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let has_records = self.state.directory.filtered_len() > 0;
                    ui.add_enabled_ui(has_records, |ui| {
                        if ui.button("Directory Summary").clicked() {
                            self.state.show_summary = true;
                            ui.close_menu();
                        }
                    });
                });
            });
        });

        // Filter bar
        egui::TopBottomPanel::top("filter_bar").show(ctx, |ui| {
            ui::panels::filters::render(ui, &mut self.state);
        });

        // Non-fatal warnings (config validation), shown until dismissed.
        if !self.state.warnings.is_empty() {
            egui::TopBottomPanel::top("warnings").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(
                        egui::Color32::from_rgb(217, 119, 6),
                        format!("{} warning(s)", self.state.warnings.len()),
                    );
                    if ui.small_button("Dismiss").clicked() {
                        self.state.warnings.clear();
                    }
                });
                for warning in &self.state.warnings {
                    ui.label(warning);
                }
            });
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.directory.total_len();
                    let filtered = self.state.directory.filtered_len();
                    if total > 0 {
                        ui.label(format!("{filtered}/{total} companies"));
                    }
                    if let Some(fetched_at) = self.state.fetched_at {
                        ui.label(format!(
                            "fetched {}",
                            fetched_at.format("%H:%M:%S UTC")
                        ));
                        ui.separator();
                    }
                });
            });
        });

        // Pagination strip (sits above the status bar)
        egui::TopBottomPanel::bottom("pagination").show(ctx, |ui| {
            ui::panels::pagination::render(ui, &mut self.state);
        });

        // Central panel (table)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::table::render(ui, &self.state);
        });

        // Summary dialog (modal-ish)
        ui::panels::summary::render(ctx, &mut self.state);
    }
}
