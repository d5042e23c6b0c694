use eframe::egui::{self, Id, Ui};

// ---------------------------------------------------------------------------
// Chart tooltip – pointer-anchored readout with fade in/out
// ---------------------------------------------------------------------------

const FADE_IN_SECS: f32 = 0.2;
const FADE_OUT_SECS: f32 = 0.5;

/// Format the hover readout for a single series point.
pub fn readout(year: i32, label: &str, value_text: &str) -> String {
    format!("{year} — {label}: {value_text}")
}

/// Show (or fade out) the chart tooltip.
///
/// Pass `Some(text)` while a shape is hovered and `None` otherwise.  The
/// tooltip fades in over 200 ms and out over 500 ms; the last content is
/// kept around so the fade-out still has something to draw.
pub fn show(ui: &Ui, id_source: &str, content: Option<String>) {
    let ctx = ui.ctx().clone();
    let id = Id::new("chart_tooltip").with(id_source);

    if let Some(text) = &content {
        ctx.data_mut(|d| d.insert_temp(id.with("last"), text.clone()));
    }

    let visible = content.is_some();
    let fade_secs = if visible { FADE_IN_SECS } else { FADE_OUT_SECS };
    let alpha = ctx.animate_bool_with_time(id.with("fade"), visible, fade_secs);
    if alpha <= 0.01 {
        return;
    }

    let Some(text) =
        content.or_else(|| ctx.data_mut(|d| d.get_temp::<String>(id.with("last"))))
    else {
        return;
    };

    egui::show_tooltip_at_pointer(&ctx, ui.layer_id(), id, |ui: &mut Ui| {
        ui.set_opacity(alpha);
        ui.label(text);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_interpolates_year_and_value() {
        assert_eq!(
            readout(1975, "Wine production", "6.93 Mt"),
            "1975 — Wine production: 6.93 Mt"
        );
    }
}
