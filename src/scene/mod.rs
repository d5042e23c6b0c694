//! Scene layer: one mutually-exclusive narrative view at a time.
//!
//! The registry is the closed [`Scene`] enum plus the per-frame [`render`]
//! dispatch.  Activation lives on `AppState` (resetting per-scene state);
//! rendering is stateless and rebuilt from source data every frame, so
//! switching scenes can never leave residue from the previous one.

use eframe::egui::Ui;

use crate::state::AppState;

mod bars;
mod comparison;
mod consumption;
mod exploration;
mod intro;
mod lines;
mod production;

// ---------------------------------------------------------------------------
// Scene – the closed enumeration of views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Introduction,
    Production,
    Consumption,
    Comparison,
    Exploration,
}

impl Scene {
    pub const ALL: [Scene; 5] = [
        Scene::Introduction,
        Scene::Production,
        Scene::Consumption,
        Scene::Comparison,
        Scene::Exploration,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Scene::Introduction => "Introduction",
            Scene::Production => "Production",
            Scene::Consumption => "Consumption",
            Scene::Comparison => "Comparison",
            Scene::Exploration => "Explore",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-frame dispatch
// ---------------------------------------------------------------------------

/// Render exactly the active scene.
pub fn render(ui: &mut Ui, state: &mut AppState) {
    match state.scene {
        Scene::Introduction => intro::render(ui, state),
        Scene::Production => production::render(ui, state),
        Scene::Consumption => consumption::render(ui, state),
        Scene::Comparison => comparison::render(ui, state),
        Scene::Exploration => exploration::render(ui, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_titles_are_distinct() {
        for (i, a) in Scene::ALL.iter().enumerate() {
            for b in &Scene::ALL[i + 1..] {
                assert_ne!(a.title(), b.title());
            }
        }
    }
}
