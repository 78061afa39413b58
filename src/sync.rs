//! Mirroring of file opens into the linked partner pane.
//!
//! The only hazard is re-entrancy: opening the file in the partner may make
//! the host raise another file-open event before `open_file` returns. The
//! `syncing` flag is held by a [`SyncGuard`] for the duration of the open and
//! reset on drop, so failures and unwinds clear it too.

use crate::pane::{PaneId, Workspace};
use std::cell::Cell;

/// Result of one mirroring attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorOutcome {
    /// Another mirror is in flight; the event was ignored.
    Reentrant,
    /// The partner is no longer open; treated as no partner.
    PartnerGone(PaneId),
    /// The host accepted the open request.
    Mirrored(PaneId),
    /// The host rejected the open request.
    Failed(PaneId),
}

/// Scoped hold on the re-entrancy flag.
pub struct SyncGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> SyncGuard<'a> {
    /// Set the flag, or return `None` if it is already set.
    pub fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for SyncGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Re-entrancy state for mirrored opens.
#[derive(Debug, Default)]
pub struct SyncEngine {
    syncing: Cell<bool>,
}

impl SyncEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a mirrored open is in progress.
    pub fn is_syncing(&self) -> bool {
        self.syncing.get()
    }

    /// Open `path` in `partner`, one hop only.
    pub fn mirror<W: Workspace + ?Sized>(
        &self,
        host: &W,
        partner: PaneId,
        path: &str,
    ) -> MirrorOutcome {
        let Some(_guard) = SyncGuard::acquire(&self.syncing) else {
            crate::debug_trace!("SYNC", "Ignoring nested open of '{}'", path);
            return MirrorOutcome::Reentrant;
        };

        if !host.contains_pane(partner) {
            crate::debug_log!("SYNC", "Partner {} is gone, skipping '{}'", partner, path);
            return MirrorOutcome::PartnerGone(partner);
        }

        match host.open_file(partner, path) {
            Ok(()) => {
                crate::debug_log!("SYNC", "Mirrored '{}' into {}", path, partner);
                MirrorOutcome::Mirrored(partner)
            }
            Err(e) => {
                log::warn!("Failed to mirror '{}' into {}: {}", path, partner, e);
                MirrorOutcome::Failed(partner)
            }
        }
    }
}
