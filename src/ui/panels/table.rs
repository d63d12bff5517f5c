// FirmLens - ui/panels/table.rs
//
// Central table: the current page window of the filtered directory.
//
// Phase-aware: Loading shows a spinner, Error shows the failure message
// verbatim instead of the table, an empty filtered set shows a placeholder.

use crate::app::state::AppState;
use crate::core::model::SessionPhase;
use crate::ui::theme;

/// Render the directory table (central area).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    match &state.phase {
        SessionPhase::Loading => {
            ui.centered_and_justified(|ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Fetching company directory...");
                });
            });
        }
        SessionPhase::Error(message) => {
            ui.centered_and_justified(|ui| {
                ui.colored_label(
                    egui::Color32::from_rgb(220, 38, 38),
                    format!("Error: {message}"),
                );
            });
        }
        SessionPhase::Loaded => {
            if state.directory.filtered_len() == 0 {
                ui.centered_and_justified(|ui| {
                    if state.directory.total_len() == 0 {
                        ui.label("The directory is empty.");
                    } else {
                        ui.label("No companies match the current filters.");
                    }
                });
                return;
            }
            render_table(ui, state);
        }
    }
}

fn render_table(ui: &mut egui::Ui, state: &AppState) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("company_table")
                .striped(true)
                .num_columns(4)
                .min_row_height(theme::TABLE_ROW_HEIGHT)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("ID");
                    ui.strong("Name");
                    ui.strong("Location");
                    ui.strong("Industry");
                    ui.end_row();

                    for record in state.directory.page_records() {
                        ui.monospace(record.id.to_string());
                        ui.label(&record.name);
                        ui.label(&record.location);

                        // Industry cell: coloured dot + sector name.
                        ui.horizontal(|ui| {
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(
                                    theme::INDUSTRY_DOT_RADIUS * 2.0,
                                    theme::INDUSTRY_DOT_RADIUS * 2.0,
                                ),
                                egui::Sense::hover(),
                            );
                            ui.painter().circle_filled(
                                rect.center(),
                                theme::INDUSTRY_DOT_RADIUS,
                                theme::industry_colour(&record.industry),
                            );
                            ui.label(&record.industry);
                        });
                        ui.end_row();
                    }
                });
        });
}
