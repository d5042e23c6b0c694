use eframe::egui::Ui;

use crate::annotate::Annotation;
use crate::scene::bars::{self, BarScene};
use crate::state::AppState;

/// Callouts pinned to notable consumption years.
const ANNOTATIONS: &[Annotation] = &[
    Annotation::at(1961, "Peak of the post-war drinking era"),
    Annotation::at(1991, "Loi Évin restricts alcohol advertising"),
];

/// Consumption scene: litres of pure alcohol per capita per year.
///
/// The categorical axis runs newest year first, mirroring the reversed
/// presentation of the original narrative.  The underlying dataset stays in
/// ascending year order.
pub fn render(ui: &mut Ui, state: &AppState) {
    let Some(data) = &state.data else { return };

    bars::render(
        ui,
        BarScene {
            id: "consumption_chart",
            heading: "Alcohol consumption",
            blurb: "Litres of pure alcohol consumed per person per year, newest first.",
            dataset: &data.consumption,
            annotations: ANNOTATIONS,
            color: state.colors.consumption,
            newest_first: true,
        },
    );
}
