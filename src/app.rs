use eframe::egui;

use crate::state::AppState;
use crate::ui::{dashboard, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PlacementLensApp {
    pub state: AppState,
}

impl PlacementLensApp {
    /// Start with an optional preloaded dataset (from a command-line path).
    pub fn new(dataset: Option<crate::data::model::Dataset>) -> Self {
        let mut state = AppState::default();
        if let Some(dataset) = dataset {
            state.set_dataset(dataset);
        }
        Self { state }
    }
}

impl eframe::App for PlacementLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard tabs ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard::show(ui, &mut self.state);
        });
    }
}
