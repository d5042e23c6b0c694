mod annotate;
mod app;
mod color;
mod data;
mod feature;
mod scene;
mod state;
mod ui;

use std::path::PathBuf;

use app::VinoscopeApp;
use eframe::egui;
use feature::Features;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));

    let mut state = AppState::new(data_dir.clone(), Features::detect());
    state.load_data(&data_dir);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Vinoscope – Wine & Alcohol in France",
        options,
        Box::new(|_cc| Ok(Box::new(VinoscopeApp::new(state)))),
    )
}
