// src/rules/mod.rs

pub mod codec;
pub mod definitions;
pub mod edits;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod rule_table;
pub mod systems;

mod codec_tests;
mod resources_tests;
mod rule_table_tests;

// Re-export the plugin for easy use in main.rs.
pub use plugin::RulesPlugin;
