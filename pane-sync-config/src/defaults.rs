//! Default value functions for settings.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! [`Settings`](crate::Settings) fields so a partially written file still
//! loads with every missing option at its default.

/// Sync is active out of the box.
pub fn enabled() -> bool {
    true
}

/// Links are not persisted unless the user opts in.
pub fn auto_restore_links() -> bool {
    false
}

pub fn saved_pairs() -> Vec<String> {
    Vec::new()
}

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "pane-sync";

/// File name of the settings object inside [`APP_DIR_NAME`].
pub const SETTINGS_FILE_NAME: &str = "data.json";
