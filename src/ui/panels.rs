use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – global filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Logo (centered) ----
    let logo = egui::include_image!("../../assets/logo.png");
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(logo)
                .max_width(ui.available_width() * 0.8)
                .max_height(80.0)
                .rounding(4.0),
        );
    });
    ui.add_space(4.0);

    ui.heading("Section 8 Properties");
    ui.separator();

    let Some(table) = state.table.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- State selector ----
            ui.strong("State");
            let current_state = state.selected_state.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("state_select")
                .selected_text(&current_state)
                .show_ui(ui, |ui: &mut Ui| {
                    for s in &table.states {
                        if ui.selectable_label(current_state == *s, s).clicked() {
                            state.select_state(s.clone());
                        }
                    }
                });
            ui.separator();

            // ---- Counties of the chosen state ----
            ui.strong(format!(
                "Counties ({} selected)",
                state.selected_counties.len()
            ));
            for county in table.counties_in(&current_state) {
                let mut checked = state.selected_counties.contains(&county);
                if ui.checkbox(&mut checked, &county).changed() {
                    state.toggle_county(&county);
                }
            }
            ui.separator();

            // ---- Home types ----
            ui.strong(format!(
                "Home types ({}/{})",
                state.selected_home_types.len(),
                table.home_types.len()
            ));
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_home_types();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_home_types();
                }
            });
            for home_type in &table.home_types {
                let mut checked = state.selected_home_types.contains(home_type);
                if ui.checkbox(&mut checked, home_type).changed() {
                    state.toggle_home_type(home_type);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            let matching = filter::filtered_indices(table, &state.criteria()).len();
            ui.label(format!(
                "{} listings loaded, {matching} matching the filters",
                table.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open listings data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_dataset(&path);
    }
}
