//! Pane-link registry and file synchronization engine.
//!
//! Pairs two panes of a host document workspace so that opening a file in
//! one opens the same file in the other, while scroll position, cursor and
//! selection stay independent.
//!
//! The host implements [`pane::Workspace`] and forwards its events to a
//! [`plugin::PaneSync`] context:
//!
//! ```rust,no_run
//! use pane_sync::pane::{MemoryWorkspace, Workspace};
//! use pane_sync::plugin::{Command, PaneSync};
//! use pane_sync_config::FileSettingsStore;
//!
//! let ws = MemoryWorkspace::new();
//! let a = ws.add_pane(Some("x.md"));
//! ws.add_pane(Some("x.md"));
//!
//! let plugin = PaneSync::load(FileSettingsStore::at_default_location());
//! plugin.on_layout_ready(&ws);
//! plugin.run_command(&ws, Command::LinkPane).ok();
//!
//! ws.navigate(a, "y.md");
//! plugin.on_file_open(&ws, a, ws.displayed_file(a).as_deref());
//! plugin.unload(&ws);
//! ```

#[macro_use]
pub mod debug;

pub mod cli;
pub mod error;
pub mod link;
pub mod pane;
pub mod plugin;
pub mod session;
pub mod sync;

pub use error::LinkError;
pub use pane_sync_config as config;
