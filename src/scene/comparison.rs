use eframe::egui::Ui;

use crate::scene::lines;
use crate::state::AppState;

/// Comparison scene: both series over the full year range, each on its own
/// independent vertical scale.
pub fn render(ui: &mut Ui, state: &AppState) {
    let Some(data) = &state.data else { return };

    ui.heading("Production vs. consumption");
    ui.label(
        "Each line is scaled to its own peak, so read direction, not distance: \
         the lines' closeness says nothing about absolute quantities.",
    );
    ui.add_space(4.0);

    lines::dual_line_plot(
        ui,
        "comparison_chart",
        &data.production,
        &data.consumption,
        data.production.points(),
        data.consumption.points(),
        state.colors,
    );
}
