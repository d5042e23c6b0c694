use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use crate::annotate::{self, Annotation};
use crate::data::model::Dataset;
use crate::ui::tooltip;

// ---------------------------------------------------------------------------
// Shared bar-chart scene (production / consumption)
// ---------------------------------------------------------------------------

pub struct BarScene<'a> {
    pub id: &'a str,
    pub heading: &'a str,
    pub blurb: &'a str,
    pub dataset: &'a Dataset,
    pub annotations: &'a [Annotation],
    pub color: Color32,
    /// Categorical axis order: newest year leftmost when set (the
    /// consumption view's reversed presentation).
    pub newest_first: bool,
}

/// Render a categorical bar chart over the dataset's years.
///
/// Bars sit at index positions of the display order; the axis formatter maps
/// indices back to year labels, which is what makes the axis categorical.
pub fn render(ui: &mut Ui, scene: BarScene) {
    ui.heading(scene.heading);
    ui.label(scene.blurb);
    ui.add_space(4.0);

    let points = scene.dataset.points();
    let n = points.len();
    let display_index = |ascending_idx: usize| {
        if scene.newest_first {
            n - 1 - ascending_idx
        } else {
            ascending_idx
        }
    };

    let bars: Vec<Bar> = points
        .iter()
        .enumerate()
        .map(|(i, p)| Bar::new(display_index(i) as f64, p.value).width(0.7))
        .collect();
    let chart = BarChart::new(bars)
        .color(scene.color)
        .name(&scene.dataset.label);

    let axis_years: Vec<i32> = {
        let mut years: Vec<i32> = points.iter().map(|p| p.year).collect();
        if scene.newest_first {
            years.reverse();
        }
        years
    };
    let unit = scene.dataset.unit;
    let headroom = scene.dataset.max_value() * 0.05;

    let hover = Plot::new(scene.id)
        .legend(Legend::default())
        .x_axis_label("Year")
        .x_axis_formatter(move |mark: GridMark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 0.05 || i < 0.0 || i as usize >= axis_years.len() {
                return String::new();
            }
            axis_years[i as usize].to_string()
        })
        .y_axis_formatter(move |mark: GridMark, _range| unit.format(mark.value))
        .include_y(0.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);

            annotate::draw(
                plot_ui,
                scene.dataset,
                scene.annotations,
                scene.color,
                headroom,
                |p| {
                    let i = points.partition_point(|q| q.year < p.year);
                    [display_index(i) as f64, p.value]
                },
            );

            // Hover readout: pointer over a bar's extent shows its value.
            let mut hover = None;
            if plot_ui.response().hovered() {
                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    let i = pointer.x.round();
                    if (pointer.x - i).abs() <= 0.5 && i >= 0.0 && (i as usize) < n {
                        let ascending_idx = if scene.newest_first {
                            n - 1 - i as usize
                        } else {
                            i as usize
                        };
                        let p = &points[ascending_idx];
                        if pointer.y >= 0.0 && pointer.y <= p.value {
                            hover = Some(tooltip::readout(
                                p.year,
                                &scene.dataset.label,
                                &unit.format(p.value),
                            ));
                        }
                    }
                }
            }
            hover
        })
        .inner;

    tooltip::show(ui, scene.id, hover);
}
