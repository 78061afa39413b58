//! User-invokable commands and the tab-header context-menu entry.

use crate::pane::PaneId;

pub const NOTICE_LINKED: &str = "Linked with one pane for sync";
pub const NOTICE_LINK_FAILED: &str = "No pane found or created to link";
pub const NOTICE_UNLINKED: &str = "Unlinked this pane from sync";
pub const NOTICE_NOT_LINKED: &str = "This pane is not linked";

/// Menu source the host reports for right-clicks on a tab header.
pub const TAB_HEADER_SOURCE: &str = "tab-header";

/// Commands registered with the host command palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    LinkPane,
    UnlinkPane,
}

impl Command {
    pub const ALL: [Command; 2] = [Command::LinkPane, Command::UnlinkPane];

    /// Stable id the host registers the command under.
    pub fn id(self) -> &'static str {
        match self {
            Command::LinkPane => "link-pane-for-sync",
            Command::UnlinkPane => "unlink-pane-from-sync",
        }
    }

    /// Human readable name shown in the palette and menus.
    pub fn name(self) -> &'static str {
        match self {
            Command::LinkPane => "Link this pane for file sync",
            Command::UnlinkPane => "Unlink this pane from sync",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Command::LinkPane => "link",
            Command::UnlinkPane => "unlink",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }
}

/// Context-menu entry offered for a specific pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub command: Command,
    /// Pane whose tab header was right-clicked
    pub pane: PaneId,
}

impl MenuItem {
    /// Link entry for an unlinked pane, unlink entry for a linked one.
    pub fn for_pane(pane: PaneId, linked: bool) -> Self {
        let command = if linked {
            Command::UnlinkPane
        } else {
            Command::LinkPane
        };
        Self {
            title: command.name(),
            icon: command.icon(),
            command,
            pane,
        }
    }
}
