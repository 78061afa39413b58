//! The host collaborator contract.
//!
//! Everything the link engine needs from the surrounding editor goes through
//! [`Workspace`]. Methods take `&self`: a host is free to dispatch events
//! back into the engine from inside `open_file` or `split_pane`.

use super::types::{ContainerId, PaneId, SplitDirection};
use std::collections::HashSet;
use thiserror::Error;

/// Failures reported by the host for delegated operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    /// The pane was closed before the request reached it.
    #[error("pane {0} no longer exists")]
    PaneNotFound(PaneId),

    /// The host refused or failed to open the file.
    #[error("failed to open '{path}' in {pane}: {reason}")]
    OpenFailed {
        pane: PaneId,
        path: String,
        reason: String,
    },
}

/// Host workspace as seen by the link engine.
pub trait Workspace {
    /// All open panes, in host enumeration order.
    fn panes(&self) -> Vec<PaneId>;

    /// Currently focused pane, if any.
    fn active_pane(&self) -> Option<PaneId>;

    /// Path of the file shown in `pane`. `None` for empty panes and
    /// non-document views.
    fn displayed_file(&self, pane: PaneId) -> Option<String>;

    /// Immediate parent container of `pane`.
    fn container_of(&self, pane: PaneId) -> Option<ContainerId>;

    /// Parent of `container`; `None` at the top of the tree.
    fn parent_container(&self, container: ContainerId) -> Option<ContainerId>;

    /// Root container of the main editing area (everything outside it is a
    /// side panel).
    fn main_area_root(&self) -> ContainerId;

    /// Split `pane` and return the newly created pane.
    fn split_pane(&self, pane: PaneId, direction: SplitDirection) -> Option<PaneId>;

    /// Ask the host to open `path` in `pane`. Completion is not awaited.
    fn open_file(&self, pane: PaneId, path: &str) -> Result<(), WorkspaceError>;

    /// Show a transient notice to the user.
    fn notify(&self, message: &str);

    /// Attach (`linked == true`) or remove the link indicator on `pane`.
    fn set_link_indicator(&self, pane: PaneId, linked: bool);

    /// Whether `pane` is still open.
    fn contains_pane(&self, pane: PaneId) -> bool {
        self.panes().contains(&pane)
    }

    /// Snapshot of open pane ids for membership checks.
    fn live_panes(&self) -> HashSet<PaneId> {
        self.panes().into_iter().collect()
    }

    /// Walk the ancestor chain of `pane` until it reaches the main-area root
    /// or runs out of parents.
    fn is_in_main_area(&self, pane: PaneId) -> bool {
        let root = self.main_area_root();
        let mut seen = HashSet::new();
        let mut current = self.container_of(pane);
        while let Some(container) = current {
            if container == root {
                return true;
            }
            if !seen.insert(container) {
                log::warn!("Container cycle detected above {} at {}", pane, container);
                return false;
            }
            current = self.parent_container(container);
        }
        false
    }

    /// Panes in the main editing area, in enumeration order.
    fn main_area_panes(&self) -> Vec<PaneId> {
        self.panes()
            .into_iter()
            .filter(|&pane| self.is_in_main_area(pane))
            .collect()
    }

    /// Main-area panes currently showing exactly `path`, in enumeration order.
    fn main_area_panes_showing(&self, path: &str) -> Vec<PaneId> {
        self.main_area_panes()
            .into_iter()
            .filter(|&pane| self.displayed_file(pane).as_deref() == Some(path))
            .collect()
    }
}
