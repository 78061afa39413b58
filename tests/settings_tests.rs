mod common;

use common::file_store;
use pane_sync::config::{Settings, SettingsStore};
use pane_sync::plugin::PaneSync;

#[test]
fn test_missing_file_yields_defaults() {
    let (store, _temp) = file_store();
    assert!(store.load().unwrap().is_none());

    let plugin = PaneSync::load(&store);
    let settings = plugin.settings();
    assert!(settings.enabled);
    assert!(!settings.auto_restore_links);
    assert!(settings.saved_pairs.is_empty());
}

#[test]
fn test_partial_object_merges_over_defaults() {
    let (store, _temp) = file_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(
        store.path(),
        r#"{ "autoRestoreLinks": true, "legacyOption": 3 }"#,
    )
    .unwrap();

    let settings = store.load().unwrap().unwrap();
    assert_eq!(settings, Settings::new().with_auto_restore(true));
}

#[test]
fn test_saved_object_uses_camel_case_keys() {
    let (store, _temp) = file_store();
    store
        .save(&Settings::new().with_saved_pairs(["notes/a.md"]))
        .unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["enabled"], true);
    assert_eq!(value["autoRestoreLinks"], false);
    assert_eq!(value["savedPairs"][0], "notes/a.md");
}

#[test]
fn test_toggles_are_written_immediately() {
    let (store, _temp) = file_store();
    let plugin = PaneSync::load(&store);

    plugin.set_enabled(false);
    assert!(!store.load().unwrap().unwrap().enabled);

    plugin.set_auto_restore(true);
    let stored = store.load().unwrap().unwrap();
    assert!(!stored.enabled);
    assert!(stored.auto_restore_links);
}

#[test]
fn test_unload_without_persistence_keeps_old_pairs() {
    let (store, _temp) = file_store();
    store
        .save(&Settings::new().with_saved_pairs(["old.md"]))
        .unwrap();

    let (ws, panes) = common::workspace_with(&[Some("x.md"), Some("x.md")]);
    let plugin = PaneSync::load(&store);
    plugin.link_pane(&ws, panes[0]).unwrap();
    plugin.unload(&ws);

    assert_eq!(
        store.load().unwrap().unwrap().saved_pairs,
        vec!["old.md".to_string()]
    );
    assert!(!ws.has_indicator(panes[0]));
}
