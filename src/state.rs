use std::path::{Path, PathBuf};

use crate::color::SeriesColors;
use crate::data::filter::YearRange;
use crate::data::loader;
use crate::data::model::TrendData;
use crate::feature::Features;
use crate::scene::Scene;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded series pair (None until a load succeeds).
    pub data: Option<TrendData>,

    /// The active scene.  Exactly one; rendering is stateless per frame.
    pub scene: Scene,

    /// Exploration scene's year interval.  Reset to the full extent on
    /// every entry into the exploration scene.
    pub view_range: YearRange,

    /// Directory the datasets were (or will be) loaded from.
    pub data_dir: PathBuf,

    /// Optional capabilities resolved at startup.
    pub features: Features,

    /// Series colors shared by every scene.
    pub colors: SeriesColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// The missing-slider diagnostic is logged once, not every frame.
    pub slider_warning_logged: bool,
}

impl AppState {
    pub fn new(data_dir: PathBuf, features: Features) -> Self {
        AppState {
            data: None,
            scene: Scene::Introduction,
            view_range: YearRange::new(0, 0),
            data_dir,
            features,
            colors: SeriesColors::default(),
            status_message: None,
            slider_warning_logged: false,
        }
    }

    /// Load (or reload) both datasets from `dir`.  On failure the previous
    /// data is kept and the error surfaces in the status line.
    pub fn load_data(&mut self, dir: &Path) {
        match loader::load_dir(dir) {
            Ok(data) => {
                log::info!(
                    "Loaded {} production and {} consumption points from {}",
                    data.production.len(),
                    data.consumption.len(),
                    dir.display()
                );
                self.data_dir = dir.to_path_buf();
                self.set_data(data);
            }
            Err(e) => {
                log::error!("Failed to load datasets: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest freshly loaded data and reset derived state.
    pub fn set_data(&mut self, data: TrendData) {
        self.view_range = data.combined_extent().into();
        self.data = Some(data);
        self.status_message = None;
    }

    /// Switch the active scene.  Per-scene state does not survive across
    /// activations: entering the exploration scene resets its view range to
    /// the full year extent.
    pub fn activate_scene(&mut self, scene: Scene) {
        if scene == Scene::Exploration {
            if let Some(data) = &self.data {
                self.view_range = data.combined_extent().into();
            }
        }
        self.scene = scene;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{DataPoint, Dataset, Unit};

    fn trend_data() -> TrendData {
        let pts = |years: &[i32]| {
            years
                .iter()
                .map(|&year| DataPoint { year, value: 1.0 })
                .collect()
        };
        TrendData {
            production: Dataset::from_points("wine", Unit::Tonnes, pts(&[1961, 1962, 1963]))
                .unwrap(),
            consumption: Dataset::from_points(
                "alcohol",
                Unit::LitresPerCapita,
                pts(&[1961, 1962, 1963, 1964]),
            )
            .unwrap(),
        }
    }

    fn state_with_data() -> AppState {
        let mut state = AppState::new(PathBuf::from("data"), Features::resolve(false));
        state.set_data(trend_data());
        state
    }

    #[test]
    fn entering_exploration_resets_view_range_to_full_extent() {
        let mut state = state_with_data();
        state.activate_scene(Scene::Exploration);
        state.view_range = YearRange::new(1962, 1963);

        state.activate_scene(Scene::Comparison);
        state.activate_scene(Scene::Exploration);
        assert_eq!(state.view_range, YearRange::new(1961, 1964));
    }

    #[test]
    fn activation_is_total_over_the_scene_enum() {
        let mut state = state_with_data();
        for &scene in &Scene::ALL {
            state.activate_scene(scene);
            assert_eq!(state.scene, scene);
        }
    }

    #[test]
    fn repeated_switching_keeps_exactly_one_active_scene() {
        let mut state = state_with_data();
        for _ in 0..3 {
            for &scene in &Scene::ALL {
                state.activate_scene(scene);
            }
        }
        assert_eq!(state.scene, *Scene::ALL.last().unwrap());
    }

    #[test]
    fn load_failure_surfaces_a_status_message() {
        let mut state = AppState::new(PathBuf::from("data"), Features::resolve(false));
        state.load_data(Path::new("/nonexistent/nowhere"));
        assert!(state.data.is_none());
        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.starts_with("Error:"));
    }
}
