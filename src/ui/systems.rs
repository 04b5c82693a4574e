// src/ui/systems.rs

use bevy::app::AppExit;
use bevy::prelude::*;

use crate::rules::events::RulesOperationFeedback;
use crate::settings::{io as settings_io, AppSettings};
use crate::ui::elements::state::EditorWindowState;
use crate::ui::UiFeedbackState;

// Scroll writes are debounced so dragging the grid does not hammer the disk.
const SCROLL_SAVE_DEBOUNCE_SECS: f32 = 1.0;

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<RulesOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        // Prioritize showing the first non-error, or the last error.
        if !event.is_error {
            break;
        }
    }
    if let Some((message, is_error)) = last_message {
        ui_feedback_state.last_message = message;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Startup system: carries the persisted scroll offset into the editor
/// state. The scroll area applies it on its first frame.
pub fn restore_editor_settings(
    settings: Res<AppSettings>,
    mut state: ResMut<EditorWindowState>,
) {
    state.matrix_scroll_left = settings.matrix_scroll_left;
    state.scroll_restored = false;
}

/// Mirrors the grid scroll offset into the settings file, debounced. Best
/// effort: failures are logged and ignored.
pub fn persist_scroll_offset(
    time: Res<Time>,
    mut last_write_time: Local<f32>,
    state: Res<EditorWindowState>,
    mut settings: ResMut<AppSettings>,
) {
    if (settings.matrix_scroll_left - state.matrix_scroll_left).abs() < 0.5 {
        return;
    }
    let now = time.elapsed_secs();
    if now - *last_write_time < SCROLL_SAVE_DEBOUNCE_SECS {
        return;
    }
    *last_write_time = now;

    settings.matrix_scroll_left = state.matrix_scroll_left;
    if let Err(e) = settings_io::save_settings(&settings) {
        warn!("Failed to persist editor settings: {}", e);
    }
}

/// Final settings write when the app closes, so the latest scroll position
/// survives even within the debounce window.
pub fn save_settings_on_exit(
    mut exit_events: EventReader<AppExit>,
    state: Res<EditorWindowState>,
    mut settings: ResMut<AppSettings>,
) {
    if exit_events.is_empty() {
        return;
    }
    exit_events.clear();

    settings.matrix_scroll_left = state.matrix_scroll_left;
    if let Err(e) = settings_io::save_settings(&settings) {
        warn!("Failed to persist editor settings on exit: {}", e);
    }
}
