//! Host pane model for the link engine
//!
//! - `PaneId` / `ContainerId`: opaque identities of host-owned objects
//! - `Workspace`: the collaborator contract the host implements
//! - `MemoryWorkspace`: headless implementation for tests and simulation

mod memory;
mod types;
mod workspace;

pub use memory::{MemoryWorkspace, OpenHook};
pub use types::{ContainerId, PaneId, SplitDirection};
pub use workspace::{Workspace, WorkspaceError};
