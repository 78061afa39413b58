//! Scripted workspace simulation.
//!
//! A script declares the starting panes and a list of steps; each step is
//! applied to a [`MemoryWorkspace`] and the resulting host events are
//! forwarded to a [`PaneSync`] context, the same way a real host would.
//! Pane ids are assigned from 1 in declaration order; panes created by
//! splits continue the sequence.
//!
//! ```json
//! {
//!   "settings": { "autoRestoreLinks": true },
//!   "panes": [ { "file": "x.md" }, { "file": "x.md" }, { "file": "x.md", "sidebar": true } ],
//!   "steps": [
//!     { "action": "command", "command": "link-pane-for-sync", "pane": 1 },
//!     { "action": "navigate", "pane": 1, "file": "y.md" },
//!     { "action": "restart" },
//!     { "action": "close", "pane": 2 }
//!   ]
//! }
//! ```

use crate::pane::{MemoryWorkspace, PaneId, Workspace};
use crate::plugin::{Command, PaneSync};
use anyhow::{Context, Result, bail};
use pane_sync_config::{MemorySettingsStore, Settings};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Settings the simulated plugin starts with (defaults when absent)
    #[serde(default)]
    pub settings: Option<Settings>,
    #[serde(default)]
    pub panes: Vec<PaneSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaneSpec {
    pub file: Option<String>,
    /// Place the pane in the side panel instead of the main area
    #[serde(default)]
    pub sidebar: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// Focus `pane` (when given) and run a palette command by id
    Command { command: String, pane: Option<u64> },
    /// Right-click `pane`'s tab header and pick the offered entry
    Menu { pane: u64 },
    /// Focus `pane` and open `file` in it
    Navigate { pane: u64, file: String },
    Focus { pane: u64 },
    Close { pane: u64 },
    /// Unload the plugin and load a fresh one from the same settings store
    Restart,
}

impl Script {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("Failed to parse simulation script")
    }
}

/// Final state after all steps ran.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub panes: Vec<PaneReport>,
    pub notices: Vec<String>,
    pub saved_pairs: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaneReport {
    pub id: u64,
    pub file: Option<String>,
    pub main_area: bool,
    pub linked_to: Option<u64>,
    pub indicator: bool,
}

/// Apply `script` and return the final state.
pub fn run(script: &Script) -> Result<Report> {
    let ws = MemoryWorkspace::new();
    for pane in &script.panes {
        if pane.sidebar {
            ws.add_sidebar_pane(pane.file.as_deref());
        } else {
            ws.add_pane(pane.file.as_deref());
        }
    }

    let store = MemorySettingsStore::with_settings(script.settings.clone().unwrap_or_default());
    let mut plugin = PaneSync::load(&store);
    plugin.on_layout_ready(&ws);

    for (index, step) in script.steps.iter().enumerate() {
        crate::debug_trace!("SIMULATE", "Step {}: {:?}", index, step);
        match step {
            Step::Command { command, pane } => {
                let Some(command) = Command::from_id(command) else {
                    bail!("Step {index}: unknown command '{command}'");
                };
                if let Some(pane) = pane {
                    ws.set_active(Some(existing(&ws, *pane, index)?));
                }
                // Failures are reported to the user as notices
                let _ = plugin.run_command(&ws, command);
            }
            Step::Menu { pane } => {
                let pane = existing(&ws, *pane, index)?;
                if let Some(item) = plugin.file_menu(crate::plugin::TAB_HEADER_SOURCE, pane) {
                    let _ = plugin.activate_menu_item(&ws, &item);
                }
            }
            Step::Navigate { pane, file } => {
                let pane = existing(&ws, *pane, index)?;
                ws.navigate(pane, file);
                plugin.on_file_open(&ws, pane, Some(file.as_str()));
            }
            Step::Focus { pane } => {
                let pane = existing(&ws, *pane, index)?;
                ws.set_active(Some(pane));
                let file = ws.displayed_file(pane);
                plugin.on_file_open(&ws, pane, file.as_deref());
            }
            Step::Close { pane } => {
                let pane = existing(&ws, *pane, index)?;
                ws.close_pane(pane);
                plugin.on_layout_change(&ws);
            }
            Step::Restart => {
                plugin.unload(&ws);
                plugin = PaneSync::load(&store);
                plugin.on_layout_ready(&ws);
            }
        }
    }

    let panes = ws
        .panes()
        .into_iter()
        .map(|pane| PaneReport {
            id: pane.0,
            file: ws.displayed_file(pane),
            main_area: ws.is_in_main_area(pane),
            linked_to: plugin.partner_of(pane).map(|partner| partner.0),
            indicator: ws.has_indicator(pane),
        })
        .collect();

    Ok(Report {
        panes,
        notices: ws.notices(),
        saved_pairs: plugin.settings().saved_pairs,
    })
}

fn existing(ws: &MemoryWorkspace, pane: u64, step: usize) -> Result<PaneId> {
    let id = PaneId(pane);
    if !ws.contains_pane(id) {
        bail!("Step {step}: pane {pane} does not exist");
    }
    Ok(id)
}
