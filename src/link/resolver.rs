//! Partner lookup for the link command.

use crate::error::LinkError;
use crate::pane::{PaneId, SplitDirection, Workspace};

/// First main-area pane other than `pane` that shows `path`.
pub fn find_partner<W: Workspace + ?Sized>(host: &W, pane: PaneId, path: &str) -> Option<PaneId> {
    host.main_area_panes_showing(path)
        .into_iter()
        .find(|&candidate| candidate != pane)
}

/// Find a pane showing the same file as `pane`, or split `pane` to make one.
///
/// Candidates come from the main area only, in host enumeration order; the
/// first match wins. With `create_if_none`, a vertical split of `pane` is
/// opened on the same file and returned. The caller does the linking.
pub fn find_or_create_partner<W: Workspace + ?Sized>(
    host: &W,
    pane: PaneId,
    create_if_none: bool,
) -> Result<PaneId, LinkError> {
    let path = host.displayed_file(pane).ok_or(LinkError::NoFileOpen)?;

    if let Some(partner) = find_partner(host, pane, &path) {
        crate::debug_log!("RESOLVE", "{} shows '{}' like {}", partner, path, pane);
        return Ok(partner);
    }

    if !create_if_none {
        return Err(LinkError::NoPartnerFound);
    }

    let partner = host
        .split_pane(pane, SplitDirection::Vertical)
        .ok_or(LinkError::NoPartnerFound)?;
    if let Err(e) = host.open_file(partner, &path) {
        log::warn!("Split {} created but opening '{}' failed: {}", partner, path, e);
    }
    crate::debug_log!("RESOLVE", "Split {} into {} for '{}'", pane, partner, path);
    Ok(partner)
}
