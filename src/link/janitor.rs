//! Removal of links whose panes have closed.

use super::registry::{LinkId, LinkRegistry, PaneLink};
use crate::pane::PaneId;
use std::collections::HashSet;

/// Links with at least one side missing from `live`.
pub fn stale_links(registry: &LinkRegistry, live: &HashSet<PaneId>) -> Vec<LinkId> {
    registry
        .pairs()
        .filter(|link| !live.contains(&link.first) || !live.contains(&link.second))
        .map(|link| link.id)
        .collect()
}

/// Collect stale links first, then drop them in one batch. Both sides go,
/// including a side whose pane is still open.
pub fn sweep(registry: &mut LinkRegistry, live: &HashSet<PaneId>) -> Vec<PaneLink> {
    let stale = stale_links(registry, live);
    if stale.is_empty() {
        return Vec::new();
    }
    let removed = registry.remove_links(&stale);
    crate::debug_info!("JANITOR", "Removed {} stale link(s)", removed.len());
    removed
}
