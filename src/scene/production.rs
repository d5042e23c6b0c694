use eframe::egui::Ui;

use crate::annotate::Annotation;
use crate::scene::bars::{self, BarScene};
use crate::state::AppState;

/// Callouts pinned to notable production years.
const ANNOTATIONS: &[Annotation] = &[
    Annotation::at(1962, "Bumper harvest"),
    Annotation::span(1988, 1996, "EU vine-pull scheme"),
    Annotation::at(2017, "Spring frost hits vineyards"),
];

/// Production scene: wine production per year, oldest first.
pub fn render(ui: &mut Ui, state: &AppState) {
    let Some(data) = &state.data else { return };

    bars::render(
        ui,
        BarScene {
            id: "production_chart",
            heading: "Wine production",
            blurb: "Tonnes of wine produced in France per year.",
            dataset: &data.production,
            annotations: ANNOTATIONS,
            color: state.colors.production,
            newest_first: false,
        },
    );
}
