// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod common;
pub mod elements;
pub mod systems;

use elements::matrix_editor::life_event_rules_editor_ui;
use elements::state::EditorWindowState;
use systems::{
    handle_ui_feedback, persist_scroll_offset, restore_editor_settings, save_settings_on_exit,
};

/// Latest operation feedback line shown above the grid.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the rules editor UI.
pub struct RulesUiPlugin;

impl Plugin for RulesUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<EditorWindowState>()
            .add_systems(Startup, restore_editor_settings)
            .add_systems(
                Update,
                (handle_ui_feedback, persist_scroll_offset, save_settings_on_exit),
            )
            .add_systems(EguiContextPass, life_event_rules_editor_ui);

        info!("RulesUiPlugin initialized.");
    }
}
