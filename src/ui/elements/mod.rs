// src/ui/elements/mod.rs

pub mod matrix_editor;
pub mod state;
