//! In-memory [`Workspace`] implementation.
//!
//! Models a main editing area with left and right side panels. Splitting a
//! pane wraps it in a new split container inside its current container, so
//! main-area membership is decided by the ancestor walk just like in a real
//! host. Used by the test-suite and by `pane-sync simulate`.

use super::types::{ContainerId, PaneId, SplitDirection};
use super::workspace::{Workspace, WorkspaceError};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Callback invoked after a file was opened in a pane.
///
/// Lets a test stand in for a host that dispatches its own file-open event
/// while the engine is still inside `open_file`.
pub type OpenHook = Box<dyn Fn(&MemoryWorkspace, PaneId, &str)>;

#[derive(Debug, Clone)]
struct PaneEntry {
    id: PaneId,
    container: ContainerId,
    file: Option<String>,
}

#[derive(Debug, Default)]
struct State {
    /// Panes in enumeration order
    panes: Vec<PaneEntry>,
    /// Container -> parent container
    parents: HashMap<ContainerId, Option<ContainerId>>,
    active: Option<PaneId>,
    next_pane_id: u64,
    next_container_id: u64,
    notices: Vec<String>,
    indicators: HashSet<PaneId>,
    opened: Vec<(PaneId, String)>,
    failing: HashSet<PaneId>,
    split_disabled: bool,
}

impl State {
    fn new_container(&mut self, parent: Option<ContainerId>) -> ContainerId {
        let id = ContainerId(self.next_container_id);
        self.next_container_id += 1;
        self.parents.insert(id, parent);
        id
    }

    fn new_pane(&mut self, container: ContainerId, file: Option<String>) -> PaneId {
        let id = PaneId(self.next_pane_id);
        self.next_pane_id += 1;
        self.panes.push(PaneEntry {
            id,
            container,
            file,
        });
        id
    }

    fn entry(&self, pane: PaneId) -> Option<&PaneEntry> {
        self.panes.iter().find(|entry| entry.id == pane)
    }

    fn entry_mut(&mut self, pane: PaneId) -> Option<&mut PaneEntry> {
        self.panes.iter_mut().find(|entry| entry.id == pane)
    }
}

/// Headless workspace holding panes, containers, notices and indicators.
pub struct MemoryWorkspace {
    state: RefCell<State>,
    main_root: ContainerId,
    left_panel: ContainerId,
    right_panel: ContainerId,
    open_hook: RefCell<Option<OpenHook>>,
}

impl MemoryWorkspace {
    /// Create an empty workspace with a main area and two side panels.
    pub fn new() -> Self {
        let mut state = State {
            next_pane_id: 1,
            next_container_id: 1,
            ..State::default()
        };
        let window_root = state.new_container(None);
        let main_root = state.new_container(Some(window_root));
        let left_panel = state.new_container(Some(window_root));
        let right_panel = state.new_container(Some(window_root));
        Self {
            state: RefCell::new(state),
            main_root,
            left_panel,
            right_panel,
            open_hook: RefCell::new(None),
        }
    }

    /// Add a pane to the main area, optionally showing `file`.
    pub fn add_pane(&self, file: Option<&str>) -> PaneId {
        self.add_pane_in(self.main_root, file)
    }

    /// Add a pane to the left side panel.
    pub fn add_sidebar_pane(&self, file: Option<&str>) -> PaneId {
        self.add_pane_in(self.left_panel, file)
    }

    /// Add a pane to the right side panel.
    pub fn add_right_panel_pane(&self, file: Option<&str>) -> PaneId {
        self.add_pane_in(self.right_panel, file)
    }

    fn add_pane_in(&self, container: ContainerId, file: Option<&str>) -> PaneId {
        let mut state = self.state.borrow_mut();
        let id = state.new_pane(container, file.map(str::to_string));
        if state.active.is_none() {
            state.active = Some(id);
        }
        id
    }

    /// Close `pane`. Returns false if it was not open.
    pub fn close_pane(&self, pane: PaneId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.panes.len();
        state.panes.retain(|entry| entry.id != pane);
        let removed = state.panes.len() != before;
        if removed {
            state.indicators.remove(&pane);
            if state.active == Some(pane) {
                state.active = state.panes.first().map(|entry| entry.id);
            }
        }
        removed
    }

    /// Focus `pane` and show `path` in it, like a user navigating.
    ///
    /// Does not dispatch any event; callers forward the file-open to the
    /// engine themselves.
    pub fn navigate(&self, pane: PaneId, path: &str) -> bool {
        let mut state = self.state.borrow_mut();
        match state.entry_mut(pane) {
            Some(entry) => {
                entry.file = Some(path.to_string());
                state.active = Some(pane);
                true
            }
            None => false,
        }
    }

    /// Focus `pane` without changing its file.
    pub fn set_active(&self, pane: Option<PaneId>) {
        self.state.borrow_mut().active = pane;
    }

    /// Make every `open_file` targeting `pane` fail.
    pub fn fail_opens_in(&self, pane: PaneId) {
        self.state.borrow_mut().failing.insert(pane);
    }

    /// Refuse all future splits.
    pub fn disable_splits(&self) {
        self.state.borrow_mut().split_disabled = true;
    }

    pub fn set_open_hook(&self, hook: OpenHook) {
        *self.open_hook.borrow_mut() = Some(hook);
    }

    /// Notices shown so far, oldest first.
    pub fn notices(&self) -> Vec<String> {
        self.state.borrow().notices.clone()
    }

    pub fn last_notice(&self) -> Option<String> {
        self.state.borrow().notices.last().cloned()
    }

    /// Successful `open_file` requests, oldest first.
    pub fn opened(&self) -> Vec<(PaneId, String)> {
        self.state.borrow().opened.clone()
    }

    pub fn has_indicator(&self, pane: PaneId) -> bool {
        self.state.borrow().indicators.contains(&pane)
    }

    pub fn pane_count(&self) -> usize {
        self.state.borrow().panes.len()
    }
}

impl Default for MemoryWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace for MemoryWorkspace {
    fn panes(&self) -> Vec<PaneId> {
        self.state.borrow().panes.iter().map(|entry| entry.id).collect()
    }

    fn active_pane(&self) -> Option<PaneId> {
        self.state.borrow().active
    }

    fn displayed_file(&self, pane: PaneId) -> Option<String> {
        self.state.borrow().entry(pane)?.file.clone()
    }

    fn container_of(&self, pane: PaneId) -> Option<ContainerId> {
        self.state.borrow().entry(pane).map(|entry| entry.container)
    }

    fn parent_container(&self, container: ContainerId) -> Option<ContainerId> {
        self.state.borrow().parents.get(&container).copied().flatten()
    }

    fn main_area_root(&self) -> ContainerId {
        self.main_root
    }

    fn split_pane(&self, pane: PaneId, _direction: SplitDirection) -> Option<PaneId> {
        let mut state = self.state.borrow_mut();
        if state.split_disabled {
            return None;
        }
        let (index, parent) = state
            .panes
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.id == pane)
            .map(|(index, entry)| (index, entry.container))?;

        let split = state.new_container(Some(parent));
        state.panes[index].container = split;
        let new_id = state.new_pane(split, None);

        // New pane enumerates right after the pane it was split from
        if let Some(entry) = state.panes.pop() {
            state.panes.insert(index + 1, entry);
        }
        Some(new_id)
    }

    fn open_file(&self, pane: PaneId, path: &str) -> Result<(), WorkspaceError> {
        {
            let mut state = self.state.borrow_mut();
            if state.failing.contains(&pane) {
                return Err(WorkspaceError::OpenFailed {
                    pane,
                    path: path.to_string(),
                    reason: "open refused by host".to_string(),
                });
            }
            let entry = state
                .entry_mut(pane)
                .ok_or(WorkspaceError::PaneNotFound(pane))?;
            entry.file = Some(path.to_string());
            state.opened.push((pane, path.to_string()));
        }

        if let Some(hook) = self.open_hook.borrow().as_ref() {
            hook(self, pane, path);
        }
        Ok(())
    }

    fn notify(&self, message: &str) {
        self.state.borrow_mut().notices.push(message.to_string());
    }

    fn set_link_indicator(&self, pane: PaneId, linked: bool) {
        let mut state = self.state.borrow_mut();
        if linked {
            state.indicators.insert(pane);
        } else {
            state.indicators.remove(&pane);
        }
    }
}
