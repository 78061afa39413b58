//! Bidirectional pane pairing relation.
//!
//! Each pair gets a [`LinkId`]; a pane maps to at most one link id and a link
//! id maps to exactly two panes. Both indexes change in the same call, so a
//! pane can never end up with two partners or a one-sided link.

use crate::pane::PaneId;
use std::collections::{BTreeMap, HashMap};

/// Identity of one linked pair. Ids grow monotonically, so ordering by id is
/// link-creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(u64);

/// Two panes linked for file sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLink {
    pub id: LinkId,
    /// Pane the link was requested from
    pub first: PaneId,
    pub second: PaneId,
}

impl PaneLink {
    /// The other side of the link, if `pane` is part of it.
    pub fn other(&self, pane: PaneId) -> Option<PaneId> {
        if pane == self.first {
            Some(self.second)
        } else if pane == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}

/// Registry of linked pane pairs
#[derive(Debug, Default)]
pub struct LinkRegistry {
    links: BTreeMap<LinkId, PaneLink>,
    by_pane: HashMap<PaneId, LinkId>,
    next_link_id: u64,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `a` with `b`.
    ///
    /// Any existing partner of `a` or `b` is dropped first and left unlinked.
    /// Returns false (and changes nothing) when `a == b`.
    pub fn link(&mut self, a: PaneId, b: PaneId) -> bool {
        if a == b {
            log::warn!("Refusing to link {} with itself", a);
            return false;
        }
        if self.partner_of(a) == Some(b) {
            return true;
        }

        self.unlink(a);
        self.unlink(b);

        let id = LinkId(self.next_link_id);
        self.next_link_id += 1;
        self.links.insert(
            id,
            PaneLink {
                id,
                first: a,
                second: b,
            },
        );
        self.by_pane.insert(a, id);
        self.by_pane.insert(b, id);
        crate::debug_info!("LINK", "Linked {} <-> {}", a, b);
        true
    }

    /// Remove `pane`'s pairing, both sides. Returns the former partner.
    pub fn unlink(&mut self, pane: PaneId) -> Option<PaneId> {
        let id = *self.by_pane.get(&pane)?;
        let link = self.remove_link(id)?;
        crate::debug_info!("LINK", "Unlinked {} <-> {}", link.first, link.second);
        link.other(pane)
    }

    fn remove_link(&mut self, id: LinkId) -> Option<PaneLink> {
        let link = self.links.remove(&id)?;
        self.by_pane.remove(&link.first);
        self.by_pane.remove(&link.second);
        Some(link)
    }

    /// Remove a batch of links collected beforehand. Unknown ids are skipped.
    pub fn remove_links(&mut self, ids: &[LinkId]) -> Vec<PaneLink> {
        ids.iter().filter_map(|&id| self.remove_link(id)).collect()
    }

    pub fn partner_of(&self, pane: PaneId) -> Option<PaneId> {
        let id = self.by_pane.get(&pane)?;
        self.links.get(id)?.other(pane)
    }

    pub fn is_linked(&self, pane: PaneId) -> bool {
        self.by_pane.contains_key(&pane)
    }

    /// Link `pane` belongs to, if any.
    pub fn link_of(&self, pane: PaneId) -> Option<&PaneLink> {
        self.links.get(self.by_pane.get(&pane)?)
    }

    /// All pairs, oldest link first.
    pub fn pairs(&self) -> impl Iterator<Item = &PaneLink> {
        self.links.values()
    }

    /// Owned copy of all pairs, oldest first, for use while calling the host.
    pub fn snapshot(&self) -> Vec<PaneLink> {
        self.links.values().copied().collect()
    }

    /// Every pane that currently has a partner.
    pub fn linked_panes(&self) -> impl Iterator<Item = PaneId> + '_ {
        self.by_pane.keys().copied()
    }

    /// Number of linked pairs.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn clear(&mut self) {
        self.links.clear();
        self.by_pane.clear();
    }
}
