use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colors
// ---------------------------------------------------------------------------

/// Convert an HSL triple to an egui color.
fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// The two fixed series colors used across every scene.
#[derive(Debug, Clone, Copy)]
pub struct SeriesColors {
    /// Wine production: a burgundy red.
    pub production: Color32,
    /// Alcohol consumption: a steel blue.
    pub consumption: Color32,
}

impl Default for SeriesColors {
    fn default() -> Self {
        SeriesColors {
            production: hsl(345.0, 0.65, 0.45),
            consumption: hsl(207.0, 0.60, 0.50),
        }
    }
}

/// Muted variant for de-emphasized shapes (annotation guides, hover markers).
pub fn dimmed(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 110)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colors_are_distinct_and_opaque() {
        let colors = SeriesColors::default();
        assert_ne!(colors.production, colors.consumption);
        assert_eq!(colors.production.a(), 255);
        assert_eq!(colors.consumption.a(), 255);
    }
}
