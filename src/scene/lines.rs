use eframe::egui::Ui;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints, Points};

use crate::color::SeriesColors;
use crate::data::filter::nearest_point;
use crate::data::model::{DataPoint, Dataset};
use crate::ui::tooltip;

// ---------------------------------------------------------------------------
// Dual-scale line chart (comparison / exploration)
// ---------------------------------------------------------------------------

/// Map points to fraction-of-peak plot coordinates: `[year, value / max]`.
///
/// Each series is divided by its *own* maximum, so both lines top out at 1.0
/// independently.  Vertical proximity between the two lines therefore carries
/// no quantitative meaning, only directional trend — a preserved design
/// choice of the dual-axis original.
pub fn normalized(points: &[DataPoint], max: f64) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|p| {
            let y = if max > 0.0 { p.value / max } else { 0.0 };
            [p.year as f64, y]
        })
        .collect()
}

fn view_max(points: &[DataPoint]) -> f64 {
    points.iter().map(|p| p.value).fold(0.0, f64::max)
}

/// Draw both series as fraction-of-peak lines over a shared year axis,
/// with a nearest-year hover readout showing the real values of both.
pub fn dual_line_plot(
    ui: &mut Ui,
    id: &str,
    production: &Dataset,
    consumption: &Dataset,
    prod_view: &[DataPoint],
    cons_view: &[DataPoint],
    colors: SeriesColors,
) {
    let prod_max = view_max(prod_view);
    let cons_max = view_max(cons_view);

    let hover = Plot::new(id)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Share of series peak")
        .x_axis_formatter(|mark: GridMark, _range| {
            let year = mark.value;
            if (year - year.round()).abs() < 0.01 {
                format!("{:.0}", year.round())
            } else {
                String::new()
            }
        })
        .y_axis_formatter(|mark: GridMark, _range| format!("{:.0}%", mark.value * 100.0))
        .include_y(0.0)
        .include_y(1.05)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(normalized(prod_view, prod_max)))
                    .name(&production.label)
                    .color(colors.production)
                    .width(2.0),
            );
            plot_ui.line(
                Line::new(PlotPoints::from(normalized(cons_view, cons_max)))
                    .name(&consumption.label)
                    .color(colors.consumption)
                    .width(2.0),
            );

            let mut hover = None;
            if plot_ui.response().hovered() {
                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    let p = nearest_point(prod_view, pointer.x);
                    let c = nearest_point(cons_view, pointer.x);

                    if let Some(p) = p {
                        if prod_max > 0.0 {
                            plot_ui.points(
                                Points::new(vec![[p.year as f64, p.value / prod_max]])
                                    .radius(4.0)
                                    .color(colors.production),
                            );
                        }
                    }
                    if let Some(c) = c {
                        if cons_max > 0.0 {
                            plot_ui.points(
                                Points::new(vec![[c.year as f64, c.value / cons_max]])
                                    .radius(4.0)
                                    .color(colors.consumption),
                            );
                        }
                    }

                    if let Some(year) = p.or(c).map(|pt| pt.year) {
                        let mut parts = Vec::new();
                        if let Some(p) = p {
                            parts.push(format!(
                                "{}: {}",
                                production.label,
                                production.unit.format(p.value)
                            ));
                        }
                        if let Some(c) = c {
                            parts.push(format!(
                                "{}: {}",
                                consumption.label,
                                consumption.unit.format(c.value)
                            ));
                        }
                        hover = Some(format!("{year} — {}", parts.join("  ·  ")));
                    }
                }
            }
            hover
        })
        .inner;

    tooltip::show(ui, id, hover);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(year: i32, value: f64) -> DataPoint {
        DataPoint { year, value }
    }

    #[test]
    fn each_series_peaks_at_one_under_its_own_maximum() {
        // Production max 150, consumption max 200 over the same years:
        // both must reach 1.0 independently, never a shared maximum.
        let production = [pt(1960, 100.0), pt(1961, 150.0), pt(1962, 90.0)];
        let consumption = [pt(1960, 200.0), pt(1961, 120.0), pt(1962, 80.0)];

        let prod = normalized(&production, view_max(&production));
        let cons = normalized(&consumption, view_max(&consumption));

        let peak = |pts: &[[f64; 2]]| pts.iter().map(|p| p[1]).fold(0.0, f64::max);
        assert_eq!(peak(&prod), 1.0);
        assert_eq!(peak(&cons), 1.0);
        // And the raw peaks differ, so a shared scale would not produce this.
        assert_eq!(prod[1], [1961.0, 1.0]);
        assert_eq!(cons[0], [1960.0, 1.0]);
    }

    #[test]
    fn zero_or_empty_view_normalizes_to_zero() {
        assert!(normalized(&[], view_max(&[])).is_empty());
        let flat = [pt(1960, 0.0)];
        assert_eq!(normalized(&flat, view_max(&flat)), vec![[1960.0, 0.0]]);
    }
}
