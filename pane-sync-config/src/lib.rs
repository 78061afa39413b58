//! Settings system for the pane-sync link engine.
//!
//! This crate provides the settings object, its defaults, and durable
//! load/save of that object. It includes:
//!
//! - [`Settings`]: the process-wide options (`enabled`, `autoRestoreLinks`,
//!   `savedPairs`)
//! - [`SettingsStore`]: the load/save seam, with a JSON file store and an
//!   in-memory store
//! - [`ConfigError`]: typed I/O and parse failures

pub mod defaults;
mod error;
pub mod settings;
pub mod store;

pub use error::ConfigError;
pub use settings::Settings;
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore};
