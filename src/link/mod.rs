//! Pane links: the pairing relation and the operations that maintain it.
//!
//! Sub-modules:
//! - [`registry`]: `LinkRegistry`, the symmetric 1:1 pairing relation.
//! - [`resolver`]: finds or creates the partner for a pane.
//! - [`janitor`]: drops links whose panes have closed.

pub mod janitor;
pub mod registry;
pub mod resolver;

pub use registry::{LinkId, LinkRegistry, PaneLink};
pub use resolver::{find_or_create_partner, find_partner};
