//! Shared integration test helpers for pane-sync.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` attribute suppresses warnings when a file only
//! uses some of the helpers.

#![allow(dead_code)]

use pane_sync::config::{FileSettingsStore, MemorySettingsStore, Settings};
use pane_sync::pane::{MemoryWorkspace, PaneId};
use pane_sync::plugin::PaneSync;
use tempfile::TempDir;

/// Plugin with default settings and an in-memory store.
pub fn memory_plugin() -> PaneSync<MemorySettingsStore> {
    PaneSync::load(MemorySettingsStore::new())
}

/// Plugin with link persistence switched on and an in-memory store.
pub fn persisting_plugin() -> PaneSync<MemorySettingsStore> {
    PaneSync::load(MemorySettingsStore::with_settings(
        Settings::new().with_auto_restore(true),
    ))
}

/// Temp dir plus a file store inside it. Keep the `TempDir` alive for the
/// duration of the test.
pub fn file_store() -> (FileSettingsStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileSettingsStore::new(temp_dir.path().join("pane-sync").join("data.json"));
    (store, temp_dir)
}

/// Workspace with one main-area pane per entry, in order.
pub fn workspace_with(files: &[Option<&str>]) -> (MemoryWorkspace, Vec<PaneId>) {
    let ws = MemoryWorkspace::new();
    let panes = files.iter().map(|file| ws.add_pane(*file)).collect();
    (ws, panes)
}
