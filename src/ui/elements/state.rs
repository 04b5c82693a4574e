// src/ui/elements/state.rs

use bevy::prelude::*;

use crate::rules::definitions::FunctionalCategory;

/// Whether the matrix grid renders as plain text/glyphs or as editable
/// widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixViewVariant {
    #[default]
    Readonly,
    Edit,
}

/// Window-local UI state of the rules editor.
#[derive(Resource, Debug, Default)]
pub struct EditorWindowState {
    pub variant: MatrixViewVariant,
    /// Selected tab; `None` falls back to the first available category.
    pub selected_category: Option<FunctionalCategory>,
    /// Horizontal scroll offset of the matrix grid, mirrored into the
    /// settings file.
    pub matrix_scroll_left: f32,
    /// Whether the persisted scroll offset has been applied to the scroll
    /// area yet. Applied once; afterwards the user owns the offset.
    pub scroll_restored: bool,
}
