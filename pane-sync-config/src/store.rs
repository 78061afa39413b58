//! Durable load/save of the [`Settings`] object.
//!
//! The default file lives at `~/.config/pane-sync/data.json` (platform
//! config directory elsewhere). Writes are atomic: the JSON is written to a
//! sibling temp file and renamed over the target.

use crate::defaults::{APP_DIR_NAME, SETTINGS_FILE_NAME};
use crate::{ConfigError, Settings};
use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

/// Load/save seam between the link engine and durable storage.
pub trait SettingsStore {
    /// Returns `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Settings>>;

    fn save(&self, settings: &Settings) -> Result<()>;
}

/// JSON file backed settings store.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default per-user location.
    pub fn at_default_location() -> Self {
        Self::new(Self::default_path())
    }

    /// Get the settings file path (XDG convention on unix-likes)
    pub fn default_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
        }
        #[cfg(not(target_os = "windows"))]
        {
            dirs::home_dir()
                .map(|home| {
                    home.join(".config")
                        .join(APP_DIR_NAME)
                        .join(SETTINGS_FILE_NAME)
                })
                .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to read settings from {:?}", self.path))?;

        if contents.trim().is_empty() {
            return Ok(None);
        }

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to parse settings from {:?}", self.path))?;

        log::info!(
            "Loaded settings ({} saved pairs) from {:?}",
            settings.saved_pairs.len(),
            self.path
        );
        Ok(Some(settings))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(ConfigError::from)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(settings)
            .map_err(ConfigError::from)
            .context("Failed to serialize settings")?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to write settings to {:?}", temp_path))?;
        fs::rename(&temp_path, &self.path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to move settings into place at {:?}", self.path))?;

        log::debug!(
            "Saved settings ({} saved pairs) to {:?}",
            settings.saved_pairs.len(),
            self.path
        );
        Ok(())
    }
}

/// Settings store that never touches the filesystem.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    stored: Mutex<Option<Settings>>,
    saves: Mutex<usize>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `settings`, as if a previous run had saved them.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            stored: Mutex::new(Some(settings)),
            saves: Mutex::new(0),
        }
    }

    /// Last settings object written (or seeded).
    pub fn stored(&self) -> Option<Settings> {
        self.stored.lock().clone()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<Settings>> {
        Ok(self.stored.lock().clone())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        *self.stored.lock() = Some(settings.clone());
        *self.saves.lock() += 1;
        Ok(())
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    fn load(&self) -> Result<Option<Settings>> {
        (**self).load()
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        (**self).save(settings)
    }
}
