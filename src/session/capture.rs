//! Capture linked pairs as shared file paths

use crate::link::PaneLink;
use crate::pane::Workspace;
use std::collections::HashSet;

/// One path per linked pair, in link order.
///
/// Pairs where either pane shows no file are skipped. Only the first pane's
/// path is recorded; the two panes may have drifted apart since linking.
pub fn capture_saved_pairs<W: Workspace + ?Sized>(pairs: &[PaneLink], host: &W) -> Vec<String> {
    let mut visited = HashSet::new();
    let mut paths = Vec::new();

    for link in pairs {
        if !visited.insert(link.first) || !visited.insert(link.second) {
            continue;
        }
        let Some(path) = host.displayed_file(link.first) else {
            continue;
        };
        if host.displayed_file(link.second).is_none() {
            continue;
        }
        paths.push(path);
    }

    paths
}
