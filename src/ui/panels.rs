use eframe::egui::{self, Color32, RichText, Ui};

use crate::scene::Scene;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – scene buttons, file menu, status line
// ---------------------------------------------------------------------------

/// Render the top menu / scene-selection bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_data_folder(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for &scene in &Scene::ALL {
            if ui
                .selectable_label(state.scene == scene, scene.title())
                .clicked()
            {
                state.activate_scene(scene);
            }
        }

        ui.separator();

        if let Some(data) = &state.data {
            let (lo, hi) = data.combined_extent();
            ui.label(format!(
                "{} + {} points, {lo}–{hi}",
                data.production.len(),
                data.consumption.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Empty / error state – shown instead of a blank view when no data loaded
// ---------------------------------------------------------------------------

pub fn empty_state(ui: &mut Ui, state: &AppState) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            if let Some(msg) = &state.status_message {
                ui.heading("Couldn't load the datasets");
                ui.add_space(8.0);
                ui.label(RichText::new(msg).color(Color32::RED));
                ui.add_space(8.0);
                ui.label(format!(
                    "Expected wine_production.csv and alcohol_consumption.csv in {}",
                    state.data_dir.display()
                ));
                ui.label("Pick another folder via File → Open data folder…");
            } else {
                ui.heading("No data loaded  (File → Open data folder…)");
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

fn open_data_folder(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Select the folder holding the two datasets")
        .pick_folder();

    if let Some(dir) = folder {
        state.load_data(&dir);
    }
}
