//! Process-scoped plugin context
//!
//! [`PaneSync`] owns every piece of mutable state the engine has: the link
//! registry, the re-entrancy flag, the settings and the settings store. The
//! host creates it once with [`PaneSync::load`], forwards its events and
//! command invocations, and calls [`PaneSync::unload`] at shutdown.
//!
//! All entry points take `&self`. Interior state is only borrowed between
//! host calls, never across one, so a host may re-enter from inside
//! `open_file` or `split_pane`.

mod commands;

pub use commands::{
    Command, MenuItem, NOTICE_LINK_FAILED, NOTICE_LINKED, NOTICE_NOT_LINKED, NOTICE_UNLINKED,
    TAB_HEADER_SOURCE,
};

use crate::error::LinkError;
use crate::link::{LinkRegistry, PaneLink, find_or_create_partner, janitor};
use crate::pane::{PaneId, Workspace};
use crate::session;
use crate::sync::{MirrorOutcome, SyncEngine};
use pane_sync_config::{Settings, SettingsStore};
use std::cell::{Cell, RefCell};

/// Link engine state for one host process.
pub struct PaneSync<S: SettingsStore> {
    settings: RefCell<Settings>,
    store: S,
    registry: RefCell<LinkRegistry>,
    engine: SyncEngine,
    /// Set once the startup restore pass has run
    restore_done: Cell<bool>,
}

impl<S: SettingsStore> PaneSync<S> {
    /// Create the context, loading settings merged over defaults.
    ///
    /// A missing or unreadable settings object falls back to defaults.
    pub fn load(store: S) -> Self {
        let settings = match store.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                log::info!("No stored settings, using defaults");
                Settings::default()
            }
            Err(e) => {
                log::warn!("Failed to load settings, using defaults: {e:#}");
                Settings::default()
            }
        };
        Self::with_settings(store, settings)
    }

    /// Create the context with explicit settings (nothing is loaded).
    pub fn with_settings(store: S, settings: Settings) -> Self {
        Self {
            settings: RefCell::new(settings),
            store,
            registry: RefCell::new(LinkRegistry::new()),
            engine: SyncEngine::new(),
            restore_done: Cell::new(false),
        }
    }

    // =========================================================================
    // Settings
    // =========================================================================

    pub fn settings(&self) -> Settings {
        self.settings.borrow().clone()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn sync_enabled(&self) -> bool {
        self.settings.borrow().enabled
    }

    fn auto_restore(&self) -> bool {
        self.settings.borrow().auto_restore_links
    }

    /// Turn mirroring on or off and persist the choice.
    pub fn set_enabled(&self, enabled: bool) {
        self.settings.borrow_mut().enabled = enabled;
        log::info!("File sync {}", if enabled { "enabled" } else { "disabled" });
        self.save_settings();
    }

    /// Turn link persistence on or off and persist the choice.
    pub fn set_auto_restore(&self, auto_restore_links: bool) {
        self.settings.borrow_mut().auto_restore_links = auto_restore_links;
        self.save_settings();
    }

    /// Write the current settings object. Failures are logged, not returned.
    pub fn save_settings(&self) -> bool {
        let settings = self.settings();
        match self.store.save(&settings) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to save settings: {e:#}");
                false
            }
        }
    }

    // =========================================================================
    // Registry queries
    // =========================================================================

    pub fn partner_of(&self, pane: PaneId) -> Option<PaneId> {
        self.registry.borrow().partner_of(pane)
    }

    pub fn is_linked(&self, pane: PaneId) -> bool {
        self.registry.borrow().is_linked(pane)
    }

    /// Number of linked pairs.
    pub fn link_count(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Current pairs, oldest link first.
    pub fn links(&self) -> Vec<PaneLink> {
        self.registry.borrow().snapshot()
    }

    /// True while a mirrored open is in progress.
    pub fn is_syncing(&self) -> bool {
        self.engine.is_syncing()
    }

    // =========================================================================
    // Link / unlink
    // =========================================================================

    /// Find or create a partner for `pane` and link the two.
    pub fn link_pane<W: Workspace + ?Sized>(
        &self,
        host: &W,
        pane: PaneId,
    ) -> Result<PaneId, LinkError> {
        let partner = find_or_create_partner(host, pane, true)?;
        let linked = self.registry.borrow_mut().link(pane, partner);
        if !linked {
            return Err(LinkError::NoPartnerFound);
        }
        log::info!("Linked {} with {}", pane, partner);
        self.links_changed(host);
        Ok(partner)
    }

    /// Drop `pane`'s link. Returns the former partner.
    pub fn unlink_pane<W: Workspace + ?Sized>(
        &self,
        host: &W,
        pane: PaneId,
    ) -> Result<PaneId, LinkError> {
        let partner = self
            .registry
            .borrow_mut()
            .unlink(pane)
            .ok_or(LinkError::NotLinked)?;
        log::info!("Unlinked {} from {}", pane, partner);
        self.links_changed(host);
        Ok(partner)
    }

    /// Run a palette command against the focused pane.
    ///
    /// Without a focused pane the command aborts silently.
    pub fn run_command<W: Workspace + ?Sized>(
        &self,
        host: &W,
        command: Command,
    ) -> Result<PaneId, LinkError> {
        let Some(pane) = host.active_pane() else {
            crate::debug_log!("COMMAND", "{} invoked with no active pane", command.id());
            return Err(LinkError::NoActivePane);
        };
        self.execute(host, command, pane)
    }

    /// Run `command` against `pane` and show the resulting notice.
    pub fn execute<W: Workspace + ?Sized>(
        &self,
        host: &W,
        command: Command,
        pane: PaneId,
    ) -> Result<PaneId, LinkError> {
        let (result, success_notice) = match command {
            Command::LinkPane => (self.link_pane(host, pane), NOTICE_LINKED),
            Command::UnlinkPane => (self.unlink_pane(host, pane), NOTICE_UNLINKED),
        };
        match &result {
            Ok(_) => host.notify(success_notice),
            Err(e) => {
                crate::debug_log!("COMMAND", "{} on {} failed: {}", command.id(), pane, e);
                if let Some(notice) = e.notice() {
                    host.notify(notice);
                }
            }
        }
        result
    }

    /// Context-menu entry for a right-click on `pane`.
    ///
    /// Only tab-header menus get an entry.
    pub fn file_menu(&self, source: &str, pane: PaneId) -> Option<MenuItem> {
        if source != TAB_HEADER_SOURCE {
            return None;
        }
        Some(MenuItem::for_pane(pane, self.is_linked(pane)))
    }

    /// Handle a click on an entry returned by [`Self::file_menu`].
    pub fn activate_menu_item<W: Workspace + ?Sized>(
        &self,
        host: &W,
        item: &MenuItem,
    ) -> Result<PaneId, LinkError> {
        self.execute(host, item.command, item.pane)
    }

    // =========================================================================
    // Host events
    // =========================================================================

    /// `pane` became active showing `path`: mirror into its partner.
    ///
    /// Returns `None` when nothing was attempted (sync disabled, no file,
    /// mid-mirror, or no partner).
    pub fn on_file_open<W: Workspace + ?Sized>(
        &self,
        host: &W,
        pane: PaneId,
        path: Option<&str>,
    ) -> Option<MirrorOutcome> {
        let path = path?;
        if !self.sync_enabled() || self.engine.is_syncing() {
            return None;
        }
        let partner = self.partner_of(pane)?;

        let outcome = self.engine.mirror(host, partner, path);
        if self.auto_restore() {
            self.persist_links(host);
        }
        Some(outcome)
    }

    /// Drop links whose panes have closed. Returns the number removed.
    pub fn on_layout_change<W: Workspace + ?Sized>(&self, host: &W) -> usize {
        let live = host.live_panes();
        let removed = janitor::sweep(&mut self.registry.borrow_mut(), &live);
        if removed.is_empty() {
            return 0;
        }
        log::info!("Removed {} link(s) to closed panes", removed.len());
        self.links_changed(host);
        removed.len()
    }

    /// Host layout is ready after startup: restore saved links once.
    ///
    /// Restored links are treated like any other new link: indicators are
    /// refreshed and the pairs are saved again. Returns the number restored.
    pub fn on_layout_ready<W: Workspace + ?Sized>(&self, host: &W) -> usize {
        if self.restore_done.replace(true) {
            return 0;
        }
        let settings = self.settings();
        if !settings.should_restore() {
            return 0;
        }

        let candidates = session::restore_candidates(host, &settings.saved_pairs);
        let restored = session::apply_candidates(&mut self.registry.borrow_mut(), &candidates);
        log::info!(
            "Restored {} of {} saved link(s)",
            restored.len(),
            settings.saved_pairs.len()
        );
        if !restored.is_empty() {
            self.links_changed(host);
        }
        restored.len()
    }

    // =========================================================================
    // Side effects
    // =========================================================================

    fn links_changed<W: Workspace + ?Sized>(&self, host: &W) {
        self.refresh_indicators(host);
        if self.auto_restore() {
            self.persist_links(host);
        }
    }

    /// Attach the indicator to every linked pane and remove it elsewhere.
    pub fn refresh_indicators<W: Workspace + ?Sized>(&self, host: &W) {
        let panes = host.panes();
        let linked: Vec<(PaneId, bool)> = {
            let registry = self.registry.borrow();
            panes
                .into_iter()
                .map(|pane| (pane, registry.is_linked(pane)))
                .collect()
        };
        for (pane, is_linked) in linked {
            host.set_link_indicator(pane, is_linked);
        }
    }

    /// Record the current pairs as shared paths and save settings.
    pub fn persist_links<W: Workspace + ?Sized>(&self, host: &W) {
        let pairs = self.links();
        let paths = session::capture_saved_pairs(&pairs, host);
        crate::debug_log!("PERSIST", "Saving {} pair path(s)", paths.len());
        self.settings.borrow_mut().saved_pairs = paths;
        self.save_settings();
    }

    /// Flush settings (and pairs, when persistence is on) and clear state.
    pub fn unload<W: Workspace + ?Sized>(&self, host: &W) {
        if self.auto_restore() {
            self.persist_links(host);
        } else {
            self.save_settings();
        }

        let linked: Vec<PaneId> = self.registry.borrow().linked_panes().collect();
        self.registry.borrow_mut().clear();
        for pane in linked {
            if host.contains_pane(pane) {
                host.set_link_indicator(pane, false);
            }
        }
        log::info!("Pane sync unloaded");
    }
}
