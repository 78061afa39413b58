//! Link persistence across restarts
//!
//! Links are saved as the file path each pair shared, not as pane identity,
//! and restored after the host layout settles by re-matching panes that show
//! those paths again. This is best effort: panes showing the same file for
//! unrelated reasons may be paired, and reordered panes may not be.

pub mod capture;
pub mod restore;

pub use capture::capture_saved_pairs;
pub use restore::{apply_candidates, restore_candidates};
