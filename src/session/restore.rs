//! Rebuild links from saved paths

use crate::link::{LinkRegistry, PaneLink};
use crate::pane::{PaneId, Workspace};

/// Pane pairs to re-link, one per saved path that still has two matches.
///
/// For each path the first two main-area panes showing it (enumeration
/// order) are chosen; further matches stay unlinked. Paths with fewer than
/// two matches are skipped.
pub fn restore_candidates<W: Workspace + ?Sized>(
    host: &W,
    saved_pairs: &[String],
) -> Vec<(PaneId, PaneId)> {
    saved_pairs
        .iter()
        .filter_map(|path| {
            let candidates = host.main_area_panes_showing(path);
            match candidates.as_slice() {
                &[first, second, ..] => Some((first, second)),
                _ => {
                    log::debug!(
                        "Not restoring link for '{}': {} matching pane(s)",
                        path,
                        candidates.len()
                    );
                    None
                }
            }
        })
        .collect()
}

/// Link already-resolved candidate pairs, bypassing partner search.
///
/// Separate from [`restore_candidates`] so no registry borrow is held while
/// the host is queried.
pub fn apply_candidates(
    registry: &mut LinkRegistry,
    candidates: &[(PaneId, PaneId)],
) -> Vec<PaneLink> {
    let mut restored = Vec::new();
    for &(first, second) in candidates {
        if registry.partner_of(first) == Some(second) {
            continue;
        }
        if registry.link(first, second)
            && let Some(link) = registry.link_of(first)
        {
            restored.push(*link);
        }
    }
    restored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::MemoryWorkspace;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn restore_links(
        registry: &mut LinkRegistry,
        host: &MemoryWorkspace,
        saved_pairs: &[String],
    ) -> Vec<PaneLink> {
        apply_candidates(registry, &restore_candidates(host, saved_pairs))
    }

    #[test]
    fn test_restore_links_first_two_matches() {
        let ws = MemoryWorkspace::new();
        let a = ws.add_pane(Some("notes/a.md"));
        ws.add_pane(Some("other.md"));
        let c = ws.add_pane(Some("notes/a.md"));
        let d = ws.add_pane(Some("notes/a.md"));
        let mut registry = LinkRegistry::new();

        let restored = restore_links(&mut registry, &ws, &paths(&["notes/a.md"]));
        assert_eq!(restored.len(), 1);
        assert_eq!(registry.partner_of(a), Some(c));
        assert!(!registry.is_linked(d));
    }

    #[test]
    fn test_restore_skips_single_match() {
        let ws = MemoryWorkspace::new();
        ws.add_pane(Some("lonely.md"));
        let mut registry = LinkRegistry::new();
        assert!(restore_links(&mut registry, &ws, &paths(&["lonely.md", "gone.md"])).is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_restore_ignores_side_panels() {
        let ws = MemoryWorkspace::new();
        ws.add_pane(Some("a.md"));
        ws.add_sidebar_pane(Some("a.md"));
        let mut registry = LinkRegistry::new();
        assert!(restore_links(&mut registry, &ws, &paths(&["a.md"])).is_empty());
    }

    #[test]
    fn test_same_path_saved_twice_reuses_first_two() {
        let ws = MemoryWorkspace::new();
        let a = ws.add_pane(Some("a.md"));
        let b = ws.add_pane(Some("a.md"));
        ws.add_pane(Some("a.md"));
        ws.add_pane(Some("a.md"));
        let mut registry = LinkRegistry::new();
        let restored = restore_links(&mut registry, &ws, &paths(&["a.md", "a.md"]));
        assert_eq!(restored.len(), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.partner_of(a), Some(b));
    }
}
