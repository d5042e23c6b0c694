use eframe::egui::{Id, Ui};

use crate::data::filter;
use crate::scene::lines;
use crate::state::AppState;

/// Seconds the redrawn lines take to ease toward a new slider range.
const TRANSITION_SECS: f32 = 0.5;

/// Exploration scene: the comparison view restricted to a slider-driven
/// year interval.  Requires the range-slider capability; without it the
/// scene logs a diagnostic and renders nothing (other scenes unaffected).
pub fn render(ui: &mut Ui, state: &mut AppState) {
    let AppState {
        data,
        features,
        view_range,
        colors,
        slider_warning_logged,
        ..
    } = state;

    let Some(data) = data.as_ref() else { return };

    let Some(slider) = features.range_slider.as_ref() else {
        if !*slider_warning_logged {
            log::warn!("year-range slider capability unavailable, exploration scene disabled");
            *slider_warning_logged = true;
        }
        return;
    };

    ui.heading("Explore the data");
    ui.label("Narrow the year range; both series re-filter and redraw.");
    ui.add_space(4.0);

    let extent = data.combined_extent();
    slider.show(ui, view_range, extent);

    // The drawn interval eases toward the selected one; a mid-flight slider
    // change simply retargets the animation.
    let ctx = ui.ctx().clone();
    let lo = ctx.animate_value_with_time(
        Id::new("explore_lo"),
        view_range.lo as f32,
        TRANSITION_SECS,
    ) as f64;
    let hi = ctx.animate_value_with_time(
        Id::new("explore_hi"),
        view_range.hi as f32,
        TRANSITION_SECS,
    ) as f64;

    let prod_view = filter::filter_span(data.production.points(), lo, hi);
    let cons_view = filter::filter_span(data.consumption.points(), lo, hi);

    lines::dual_line_plot(
        ui,
        "exploration_chart",
        &data.production,
        &data.consumption,
        prod_view,
        cons_view,
        *colors,
    );
}
