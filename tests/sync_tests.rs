mod common;

use common::{memory_plugin, workspace_with};
use pane_sync::pane::{MemoryWorkspace, PaneId, Workspace};
use pane_sync::sync::MirrorOutcome;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_partner_open_event_is_not_mirrored_back() {
    let (ws, panes) = workspace_with(&[Some("x.md"), Some("x.md")]);
    let (a, b) = (panes[0], panes[1]);
    let plugin = Rc::new(memory_plugin());
    plugin.link_pane(&ws, a).unwrap();

    // The host raises the partner's file-open before open_file returns
    let nested: Rc<RefCell<Vec<Option<MirrorOutcome>>>> = Rc::default();
    let hook_plugin = Rc::clone(&plugin);
    let hook_nested = Rc::clone(&nested);
    ws.set_open_hook(Box::new(
        move |host: &MemoryWorkspace, pane: PaneId, path: &str| {
            assert!(hook_plugin.is_syncing());
            let outcome = hook_plugin.on_file_open(host, pane, Some(path));
            hook_nested.borrow_mut().push(outcome);
        },
    ));

    ws.navigate(a, "y.md");
    assert_eq!(
        plugin.on_file_open(&ws, a, Some("y.md")),
        Some(MirrorOutcome::Mirrored(b))
    );
    assert_eq!(*nested.borrow(), vec![None]);
    assert_eq!(ws.opened(), vec![(b, "y.md".to_string())]);
    assert!(!plugin.is_syncing());
}

#[test]
fn test_failed_open_releases_guard() {
    let (ws, panes) = workspace_with(&[Some("x.md"), Some("x.md")]);
    let (a, b) = (panes[0], panes[1]);
    let plugin = memory_plugin();
    plugin.link_pane(&ws, a).unwrap();

    ws.fail_opens_in(b);
    assert_eq!(
        plugin.on_file_open(&ws, a, Some("y.md")),
        Some(MirrorOutcome::Failed(b))
    );
    assert!(!plugin.is_syncing());
    assert_eq!(ws.displayed_file(b).as_deref(), Some("x.md"));

    // Next event still goes through the normal path
    assert_eq!(
        plugin.on_file_open(&ws, b, Some("w.md")),
        Some(MirrorOutcome::Mirrored(a))
    );
}

#[test]
fn test_mirroring_is_one_hop() {
    let (ws, panes) = workspace_with(&[Some("x.md"), Some("x.md"), Some("q.md"), Some("q.md")]);
    let plugin = memory_plugin();
    plugin.link_pane(&ws, panes[0]).unwrap();
    plugin.link_pane(&ws, panes[2]).unwrap();

    ws.navigate(panes[0], "n.md");
    plugin.on_file_open(&ws, panes[0], Some("n.md"));
    assert_eq!(ws.displayed_file(panes[1]).as_deref(), Some("n.md"));
    assert_eq!(ws.displayed_file(panes[2]).as_deref(), Some("q.md"));
    assert_eq!(ws.displayed_file(panes[3]).as_deref(), Some("q.md"));
}

#[test]
fn test_disabled_sync_skips_mirroring() {
    let (ws, panes) = workspace_with(&[Some("x.md"), Some("x.md")]);
    let plugin = memory_plugin();
    plugin.link_pane(&ws, panes[0]).unwrap();
    plugin.set_enabled(false);

    assert_eq!(plugin.on_file_open(&ws, panes[0], Some("y.md")), None);
    assert!(ws.opened().is_empty());
    // Links survive while sync is off
    assert!(plugin.is_linked(panes[0]));
}

#[test]
fn test_empty_pane_event_is_ignored() {
    let (ws, panes) = workspace_with(&[Some("x.md"), Some("x.md")]);
    let plugin = memory_plugin();
    plugin.link_pane(&ws, panes[0]).unwrap();

    assert_eq!(plugin.on_file_open(&ws, panes[0], None), None);
    assert!(ws.opened().is_empty());
}

#[test]
fn test_janitor_removes_only_dead_links() {
    let (ws, panes) = workspace_with(&[Some("a.md"), Some("a.md"), Some("b.md"), Some("b.md")]);
    let plugin = memory_plugin();
    plugin.link_pane(&ws, panes[0]).unwrap();
    plugin.link_pane(&ws, panes[2]).unwrap();

    assert_eq!(plugin.on_layout_change(&ws), 0);
    ws.close_pane(panes[3]);
    assert_eq!(plugin.on_layout_change(&ws), 1);
    assert_eq!(plugin.partner_of(panes[0]), Some(panes[1]));
    assert!(!plugin.is_linked(panes[2]));
    assert!(ws.has_indicator(panes[0]));
    assert!(!ws.has_indicator(panes[2]));
}

#[test]
fn test_closed_partner_before_sweep() {
    let (ws, panes) = workspace_with(&[Some("x.md"), Some("x.md")]);
    let plugin = memory_plugin();
    plugin.link_pane(&ws, panes[0]).unwrap();

    ws.close_pane(panes[1]);
    assert_eq!(
        plugin.on_file_open(&ws, panes[0], Some("y.md")),
        Some(MirrorOutcome::PartnerGone(panes[1]))
    );
    assert!(ws.opened().is_empty());
}
