mod common;

use common::{file_store, persisting_plugin, workspace_with};
use pane_sync::config::{Settings, SettingsStore};
use pane_sync::pane::{MemoryWorkspace, Workspace};
use pane_sync::plugin::PaneSync;

#[test]
fn test_save_restore_round_trip_through_file() {
    let (store, _temp) = file_store();
    store
        .save(&Settings::new().with_auto_restore(true))
        .unwrap();
    let (ws, panes) = workspace_with(&[Some("notes/a.md"), Some("notes/a.md")]);

    let plugin = PaneSync::load(&store);
    plugin.link_pane(&ws, panes[0]).unwrap();
    plugin.unload(&ws);
    assert_eq!(
        store.load().unwrap().unwrap().saved_pairs,
        vec!["notes/a.md".to_string()]
    );

    // Next start: same panes still showing the same path
    let plugin = PaneSync::load(&store);
    assert!(!plugin.is_linked(panes[0]));
    assert_eq!(plugin.on_layout_ready(&ws), 1);
    assert_eq!(plugin.partner_of(panes[0]), Some(panes[1]));
    assert!(ws.has_indicator(panes[0]));
    assert!(ws.has_indicator(panes[1]));
}

#[test]
fn test_restore_picks_first_two_matches_only() {
    let (store, _temp) = file_store();
    store
        .save(
            &Settings::new()
                .with_auto_restore(true)
                .with_saved_pairs(["shared.md"]),
        )
        .unwrap();
    let ws = MemoryWorkspace::new();
    ws.add_sidebar_pane(Some("shared.md"));
    let a = ws.add_pane(Some("shared.md"));
    let b = ws.add_pane(Some("shared.md"));
    let c = ws.add_pane(Some("shared.md"));

    let plugin = PaneSync::load(&store);
    assert_eq!(plugin.on_layout_ready(&ws), 1);
    assert_eq!(plugin.partner_of(a), Some(b));
    assert!(!plugin.is_linked(c));
}

#[test]
fn test_restore_skips_paths_no_longer_open() {
    let (ws, panes) = workspace_with(&[Some("a.md"), Some("a.md"), Some("b.md")]);
    let plugin = PaneSync::load(pane_sync::config::MemorySettingsStore::with_settings(
        Settings::new()
            .with_auto_restore(true)
            .with_saved_pairs(["b.md", "gone.md", "a.md"]),
    ));

    assert_eq!(plugin.on_layout_ready(&ws), 1);
    assert_eq!(plugin.partner_of(panes[0]), Some(panes[1]));
    assert!(!plugin.is_linked(panes[2]));
}

#[test]
fn test_pairs_saved_in_link_order() {
    let (ws, panes) = workspace_with(&[Some("a.md"), Some("b.md"), Some("a.md"), Some("b.md")]);
    let plugin = persisting_plugin();

    plugin.link_pane(&ws, panes[1]).unwrap();
    plugin.link_pane(&ws, panes[0]).unwrap();
    assert_eq!(
        plugin.store().stored().unwrap().saved_pairs,
        vec!["b.md".to_string(), "a.md".to_string()]
    );
}

#[test]
fn test_janitor_resaves_pairs() {
    let (ws, panes) = workspace_with(&[Some("a.md"), Some("a.md")]);
    let plugin = persisting_plugin();
    plugin.link_pane(&ws, panes[0]).unwrap();
    assert_eq!(plugin.settings().saved_pairs.len(), 1);

    ws.close_pane(panes[1]);
    assert_eq!(plugin.on_layout_change(&ws), 1);
    assert!(plugin.store().stored().unwrap().saved_pairs.is_empty());
}

#[test]
fn test_corrupt_settings_file_falls_back_to_defaults() {
    let (store, _temp) = file_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "{ \"enabled\": ").unwrap();

    let plugin = PaneSync::load(&store);
    assert_eq!(plugin.settings(), Settings::default());
}

#[test]
fn test_unwritable_settings_file_keeps_links_working() {
    let temp = tempfile::TempDir::new().unwrap();
    let blocker = temp.path().join("pane-sync");
    std::fs::write(&blocker, "").unwrap();
    let store = pane_sync::config::FileSettingsStore::new(blocker.join("data.json"));
    let (ws, panes) = workspace_with(&[Some("a.md"), Some("a.md")]);

    let plugin = PaneSync::with_settings(&store, Settings::new().with_auto_restore(true));
    assert_eq!(plugin.link_pane(&ws, panes[0]), Ok(panes[1]));

    ws.navigate(panes[0], "b.md");
    plugin.on_file_open(&ws, panes[0], Some("b.md"));
    assert_eq!(ws.displayed_file(panes[1]).as_deref(), Some("b.md"));

    ws.close_pane(panes[1]);
    assert_eq!(plugin.on_layout_change(&ws), 1);
    assert!(store.load().unwrap().is_none());
}
