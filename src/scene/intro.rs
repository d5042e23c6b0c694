use eframe::egui::Ui;

use crate::scene::Scene;
use crate::state::AppState;

/// Opening scene: sets up the narrative and offers the exploration entry.
pub fn render(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(24.0);
    ui.heading("Wine and alcohol in France");
    ui.add_space(8.0);

    if let Some(data) = &state.data {
        let (lo, hi) = data.combined_extent();
        ui.label(format!(
            "France turned from one of the world's heaviest-drinking countries into a \
             moderate one.  Between {lo} and {hi}, per-capita alcohol consumption fell \
             by more than half while wine production swung with weather, policy and \
             shrinking demand."
        ));
        ui.add_space(4.0);
        ui.label(
            "Step through the scenes above: production and consumption on their own, \
             then both trends side by side.  Or jump straight to the data:",
        );
        ui.add_space(12.0);
        if ui.button("Explore the data →").clicked() {
            state.activate_scene(Scene::Exploration);
        }
    }
}
