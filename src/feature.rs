use eframe::egui::{self, Ui};

use crate::data::filter::YearRange;

// ---------------------------------------------------------------------------
// Optional UI capabilities, resolved once at startup
// ---------------------------------------------------------------------------

/// Environment knob that disables the year-range slider capability.
pub const DISABLE_SLIDER_ENV: &str = "VINOSCOPE_NO_SLIDER";

/// Optional features the scenes may depend on.  Resolved once in `main`;
/// scenes branch on the typed option, never on ad-hoc runtime probes.
pub struct Features {
    /// The exploration scene's year-range slider.  `None` disables the scene.
    pub range_slider: Option<RangeSlider>,
}

impl Features {
    /// Resolve capabilities from the process environment.
    pub fn detect() -> Self {
        Self::resolve(std::env::var_os(DISABLE_SLIDER_ENV).is_some())
    }

    /// Pure resolution step, split out so the guard is testable.
    pub fn resolve(slider_disabled: bool) -> Self {
        Features {
            range_slider: (!slider_disabled).then_some(RangeSlider),
        }
    }
}

// ---------------------------------------------------------------------------
// RangeSlider – the year-interval control
// ---------------------------------------------------------------------------

/// Draws the two bound sliders of the exploration view.
pub struct RangeSlider;

impl RangeSlider {
    /// Show the control.  Returns `true` when the range changed; the range is
    /// clamped into `extent` with `lo <= hi` before returning.
    pub fn show(&self, ui: &mut Ui, range: &mut YearRange, extent: (i32, i32)) -> bool {
        let mut changed = false;
        ui.horizontal(|ui: &mut Ui| {
            ui.label("From");
            changed |= ui
                .add(egui::Slider::new(&mut range.lo, extent.0..=extent.1))
                .changed();
            ui.label("to");
            changed |= ui
                .add(egui::Slider::new(&mut range.hi, extent.0..=extent.1))
                .changed();
        });
        if changed {
            *range = range.clamped(extent);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_capability_present_by_default() {
        assert!(Features::resolve(false).range_slider.is_some());
    }

    #[test]
    fn slider_capability_absent_when_disabled() {
        assert!(Features::resolve(true).range_slider.is_none());
    }
}
