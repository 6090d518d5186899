mod analysis;
mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::PlacementLensApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset path on the command line; otherwise File → Open.
    let dataset = std::env::args().nth(1).map(PathBuf::from).and_then(|path| {
        match data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} placement records from {}", dataset.len(), path.display());
                Some(dataset)
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                None
            }
        }
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Placement Lens – Placement Analytics",
        options,
        Box::new(|_cc| Ok(Box::new(PlacementLensApp::new(dataset)))),
    )
}
