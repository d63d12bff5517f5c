// FirmLens - ui/panels/filters.rs
//
// Filter bar: name search (substring or regex), location and industry
// combos, Clear Filters.
//
// Widgets edit a working copy of the criteria; any change goes through
// DirectoryState::set_filter so the page cursor resets with it.

use crate::app::state::AppState;
use crate::core::filter::FilterCriteria;
use crate::ui::theme;
use crate::util::constants::{INDUSTRIES, LOCATIONS};

/// Render the filter bar (top panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut criteria = state.directory.criteria().clone();
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Search:");
        let search = ui.add(
            egui::TextEdit::singleline(&mut criteria.name_query)
                .hint_text("Company name...")
                .desired_width(theme::SEARCH_FIELD_WIDTH),
        );
        if search.changed() {
            changed = true;
        }

        if ui
            .checkbox(&mut state.regex_enabled, "Regex")
            .on_hover_text("Match company names against a regular expression")
            .changed()
        {
            if state.regex_enabled {
                apply_regex(state, &mut criteria, &mut changed);
            } else {
                criteria.name_regex = None;
                state.regex_error = None;
                changed = true;
            }
        }

        if state.regex_enabled {
            let pattern = ui.add(
                egui::TextEdit::singleline(&mut state.regex_input)
                    .hint_text("Pattern...")
                    .desired_width(theme::SEARCH_FIELD_WIDTH * 0.6),
            );
            if pattern.changed() {
                apply_regex(state, &mut criteria, &mut changed);
            }
        }

        ui.separator();

        changed |= option_combo(ui, "location_filter", "All Locations", LOCATIONS,
            &mut criteria.location);
        changed |= option_combo(ui, "industry_filter", "All Industries", INDUSTRIES,
            &mut criteria.industry);

        ui.separator();

        if ui.button("Clear Filters").clicked() {
            criteria = FilterCriteria::default();
            state.regex_enabled = false;
            state.regex_input.clear();
            state.regex_error = None;
            changed = true;
        }
    });

    if let Some(ref error) = state.regex_error {
        ui.colored_label(egui::Color32::from_rgb(220, 38, 38), error);
    }

    if changed {
        state.directory.set_filter(criteria);
    }
}

/// Compile the typed pattern into the criteria, reporting errors inline.
///
/// On an invalid pattern the previous regex stays active (set_regex leaves
/// it untouched) and the error text is shown under the bar.
fn apply_regex(state: &mut AppState, criteria: &mut FilterCriteria, changed: &mut bool) {
    match criteria.set_regex(&state.regex_input) {
        Ok(()) => {
            state.regex_error = None;
            *changed = true;
        }
        Err(e) => {
            state.regex_error = Some(e.to_string());
        }
    }
}

/// "All X" + fixed-vocabulary combo bound to an Option<String>.
/// Returns true if the selection changed.
fn option_combo(
    ui: &mut egui::Ui,
    id: &str,
    all_label: &str,
    values: &[&str],
    selection: &mut Option<String>,
) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .width(theme::COMBO_WIDTH)
        .selected_text(selection.as_deref().unwrap_or(all_label).to_string())
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(selection.is_none(), all_label)
                .clicked()
                && selection.is_some()
            {
                *selection = None;
                changed = true;
            }
            for value in values {
                let selected = selection.as_deref() == Some(*value);
                if ui.selectable_label(selected, *value).clicked() && !selected {
                    *selection = Some((*value).to_string());
                    changed = true;
                }
            }
        });
    changed
}
