//! [`Settings`]: process-wide options for the link engine.

use crate::defaults;
use serde::{Deserialize, Serialize};

/// Options persisted between runs.
///
/// Field names are written in camelCase (`autoRestoreLinks`, `savedPairs`)
/// so the stored object keeps the layout other tools already read. Missing
/// fields fall back to [`crate::defaults`] and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Mirror file opens into linked panes
    #[serde(default = "defaults::enabled")]
    pub enabled: bool,

    /// Save linked pairs and restore them on the next start
    #[serde(default = "defaults::auto_restore_links")]
    pub auto_restore_links: bool,

    /// One shared file path per linked pair, in save-time enumeration order
    #[serde(default = "defaults::saved_pairs")]
    pub saved_pairs: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: defaults::enabled(),
            auto_restore_links: defaults::auto_restore_links(),
            saved_pairs: defaults::saved_pairs(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_auto_restore(mut self, auto_restore_links: bool) -> Self {
        self.auto_restore_links = auto_restore_links;
        self
    }

    pub fn with_saved_pairs<I, S>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.saved_pairs = pairs.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a restore pass has anything to do.
    pub fn should_restore(&self) -> bool {
        self.auto_restore_links && !self.saved_pairs.is_empty()
    }
}
