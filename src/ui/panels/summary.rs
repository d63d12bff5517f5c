// FirmLens - ui/panels/summary.rs
//
// Directory summary dialog: counts by location and industry over the
// filtered set. Toggled from View > Directory Summary.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the summary dialog (modal-ish window).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_summary {
        return;
    }

    let summary = state.directory.summary();
    let total_len = state.directory.total_len();

    egui::Window::new("Directory Summary")
        .open(&mut state.show_summary)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(format!(
                "{} of {} companies match the current filters.",
                summary.total, total_len
            ));
            ui.separator();

            ui.columns(2, |columns| {
                columns[0].heading("By location");
                for (location, count) in &summary.by_location {
                    columns[0].label(format!("{location}: {count}"));
                }

                columns[1].heading("By industry");
                for (industry, count) in &summary.by_industry {
                    columns[1].horizontal(|ui| {
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
                            theme::industry_colour(industry),
                        );
                        ui.label(format!("{industry}: {count}"));
                    });
                }
            });
        });
}
