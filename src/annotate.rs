use eframe::egui::{Align2, Color32, RichText};
use egui_plot::{Line, PlotPoint, PlotPoints, PlotUi, Text};

use crate::color::dimmed;
use crate::data::model::{DataPoint, Dataset};

// ---------------------------------------------------------------------------
// Annotation – a static callout pinned to one data point
// ---------------------------------------------------------------------------

/// A textual callout anchored to the data point of a specific year.
/// `end_year` additionally draws a guide segment spanning to that year.
#[derive(Debug, Clone, Copy)]
pub struct Annotation {
    pub year: i32,
    pub label: &'static str,
    pub end_year: Option<i32>,
}

impl Annotation {
    pub const fn at(year: i32, label: &'static str) -> Self {
        Annotation {
            year,
            label,
            end_year: None,
        }
    }

    pub const fn span(year: i32, end_year: i32, label: &'static str) -> Self {
        Annotation {
            year,
            label,
            end_year: Some(end_year),
        }
    }
}

/// Match annotations against the dataset by year equality.
/// Annotations whose year is absent are dropped silently (best-effort).
pub fn resolve<'a>(
    dataset: &'a Dataset,
    annotations: &'a [Annotation],
) -> Vec<(&'a DataPoint, &'a Annotation)> {
    annotations
        .iter()
        .filter_map(|ann| dataset.point_at(ann.year).map(|p| (p, ann)))
        .collect()
}

// ---------------------------------------------------------------------------
// Overlay drawing
// ---------------------------------------------------------------------------

/// Draw the resolved annotations on top of a chart.
///
/// `position` maps a data point into the scene's plot coordinates (bar scenes
/// use categorical index positions, line scenes the year itself), `headroom`
/// is the vertical label offset in those coordinates.
pub fn draw(
    plot_ui: &mut PlotUi,
    dataset: &Dataset,
    annotations: &[Annotation],
    color: Color32,
    headroom: f64,
    position: impl Fn(&DataPoint) -> [f64; 2],
) {
    for (point, ann) in resolve(dataset, annotations) {
        let [x, y] = position(point);
        let label_y = y + headroom;

        if let Some(end_point) = ann.end_year.and_then(|ey| dataset.point_at(ey)) {
            let [x_end, _] = position(end_point);
            let guide = PlotPoints::from(vec![[x, label_y], [x_end, label_y]]);
            plot_ui.line(Line::new(guide).color(dimmed(color)).width(1.0));
        }

        plot_ui.text(
            Text::new(
                PlotPoint::new(x, label_y),
                RichText::new(ann.label).size(11.0),
            )
            .color(color)
            .anchor(Align2::LEFT_BOTTOM),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Unit;

    fn dataset() -> Dataset {
        Dataset::from_points(
            "wine",
            Unit::Tonnes,
            vec![
                DataPoint { year: 1960, value: 100.0 },
                DataPoint { year: 1961, value: 150.0 },
                DataPoint { year: 1962, value: 90.0 },
            ],
        )
        .unwrap()
    }

    #[test]
    fn present_year_resolves_to_its_point() {
        let ds = dataset();
        let anns = [Annotation::at(1961, "peak")];
        let resolved = resolve(&ds, &anns);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0.year, 1961);
        assert_eq!(resolved[0].0.value, 150.0);
    }

    #[test]
    fn absent_year_is_silently_skipped() {
        let ds = dataset();
        let anns = [Annotation::at(1999, "nowhere")];
        assert!(resolve(&ds, &anns).is_empty());
    }

    #[test]
    fn mixed_annotations_keep_only_matches_in_order() {
        let ds = dataset();
        let anns = [
            Annotation::at(1960, "first"),
            Annotation::at(1999, "missing"),
            Annotation::span(1962, 1960, "back-span"),
        ];
        let resolved = resolve(&ds, &anns);
        let years: Vec<i32> = resolved.iter().map(|(p, _)| p.year).collect();
        assert_eq!(years, vec![1960, 1962]);
    }
}
