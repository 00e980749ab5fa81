use std::path::Path;

use eframe::egui;

use crate::state::{AppState, DEFAULT_DATASET};
use crate::ui::{map, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ListingLensApp {
    pub state: AppState,
}

impl ListingLensApp {
    /// Start with the default dataset when it exists in the working directory.
    pub fn new() -> Self {
        let mut state = AppState::default();
        let default = Path::new(DEFAULT_DATASET);
        if default.exists() {
            state.load_dataset(default);
        } else {
            log::warn!("Default dataset {DEFAULT_DATASET} not found; use File → Open…");
        }
        Self { state }
    }
}

impl Default for ListingLensApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for ListingLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu / status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: global filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: per-county sections ----
        egui::CentralPanel::default().show(ctx, |ui| {
            map::county_sections(ui, &mut self.state);
        });
    }
}
