// FirmLens - ui/panels/pagination.rs
//
// Pagination strip: Previous / numbered pages / Next.
//
// Bounds are enforced twice: the controls are disabled at the first/last
// page, and DirectoryState::set_page clamps regardless. Nothing is drawn
// when the filtered set fits on a single page (or is empty).

use crate::app::state::AppState;
use crate::util::constants::MAX_PAGE_BUTTONS;

/// Render the pagination controls (bottom strip).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let total = state.directory.total_pages();
    if total <= 1 {
        return;
    }
    let current = state.directory.current_page();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(current > 1, egui::Button::new("Previous"))
            .clicked()
        {
            state.directory.set_page(current - 1);
        }

        if total <= MAX_PAGE_BUTTONS {
            for page in 1..=total {
                if ui
                    .selectable_label(page == current, page.to_string())
                    .clicked()
                {
                    state.directory.set_page(page);
                }
            }
        } else {
            ui.label(format!("Page {current} of {total}"));
        }

        if ui
            .add_enabled(current < total, egui::Button::new("Next"))
            .clicked()
        {
            state.directory.set_page(current + 1);
        }
    });
}
