//! Typed errors for link commands.
//!
//! None of these are fatal: the plugin context turns them into at most one
//! transient notice and carries on.

use thiserror::Error;

/// Why a link or unlink request did not go through.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// Command invoked with no focused pane.
    #[error("no active pane")]
    NoActivePane,

    /// The target pane shows no file.
    #[error("pane has no file open")]
    NoFileOpen,

    /// No pane shows the same file and none could be created.
    #[error("no partner pane found")]
    NoPartnerFound,

    /// Unlink requested on a pane without a partner.
    #[error("pane is not linked")]
    NotLinked,
}

impl LinkError {
    /// Notice to show the user, or `None` when the failure is silent.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            LinkError::NoActivePane => None,
            LinkError::NoFileOpen | LinkError::NoPartnerFound => {
                Some(crate::plugin::NOTICE_LINK_FAILED)
            }
            LinkError::NotLinked => Some(crate::plugin::NOTICE_NOT_LINKED),
        }
    }
}
