use eframe::egui;

use crate::scene;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct VinoscopeApp {
    pub state: AppState,
}

impl VinoscopeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for VinoscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: scene buttons + file menu ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the active scene, or a visible error state ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.data.is_some() {
                scene::render(ui, &mut self.state);
            } else {
                panels::empty_state(ui, &self.state);
            }
        });
    }
}
