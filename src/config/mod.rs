//! Configuration module for wiki-excerpt
//!
//! Handles default settings, field-by-field merging of stored settings,
//! environment overrides and persistence.

mod settings;
mod store;

pub use settings::*;
pub use store::{MemorySettingsStore, SettingsManager, SettingsStore, YamlSettingsStore};
