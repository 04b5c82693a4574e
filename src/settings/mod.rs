pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Persisted client-local preferences. Best effort: absence or a corrupt
/// file just means defaults.
#[derive(Resource, Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppSettings {
    /// Horizontal scroll offset of the matrix grid, restored on startup.
    pub matrix_scroll_left: f32,
}
