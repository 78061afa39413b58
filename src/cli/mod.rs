//! Command-line interface for pane-sync.
//!
//! Acts as the settings panel for a headless install (toggle sync and link
//! persistence, inspect or clear saved pairs) and runs scripted workspace
//! simulations against the in-memory host.

pub mod simulate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pane_sync_config::{FileSettingsStore, Settings, SettingsStore};
use std::path::PathBuf;

/// pane-sync - Keep paired editor panes on the same file
#[derive(Parser)]
#[command(name = "pane-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// Debug log level (0=off .. 4=trace), overrides DEBUG_LEVEL
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the current settings as JSON
    Show,
    /// Turn file sync on
    Enable,
    /// Turn file sync off
    Disable,
    /// Save linked pairs and restore them on the next start
    AutoRestore {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// List the saved pair paths
    Pairs,
    /// Forget all saved pair paths
    ClearPairs,
    /// Run a JSON workspace script against the link engine and print the result
    Simulate {
        /// Path to the script file
        script: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn is_on(self) -> bool {
        self == Toggle::On
    }
}

/// Parse arguments and run the selected subcommand.
pub fn process_cli() -> Result<()> {
    let cli = Cli::parse();
    crate::debug::init_log_bridge(cli.log_level.as_deref());
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let store = match cli.settings {
        Some(path) => FileSettingsStore::new(path),
        None => FileSettingsStore::at_default_location(),
    };
    log::debug!("Using settings file {:?}", store.path());

    match cli.command {
        Commands::Show => {
            let settings = load_settings(&store)?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Commands::Enable => update_settings(&store, |settings| settings.enabled = true)?,
        Commands::Disable => update_settings(&store, |settings| settings.enabled = false)?,
        Commands::AutoRestore { state } => update_settings(&store, |settings| {
            settings.auto_restore_links = state.is_on()
        })?,
        Commands::Pairs => {
            for path in load_settings(&store)?.saved_pairs {
                println!("{path}");
            }
        }
        Commands::ClearPairs => {
            let mut settings = load_settings(&store)?;
            let cleared = settings.saved_pairs.len();
            settings.saved_pairs.clear();
            store.save(&settings)?;
            println!("Cleared {cleared} saved pair(s)");
        }
        Commands::Simulate { script } => {
            let script = simulate::Script::from_file(&script)
                .with_context(|| format!("Failed to load simulation script {:?}", script))?;
            let report = simulate::run(&script)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Stored settings merged over defaults. Unlike the plugin, the CLI reports
/// a corrupt file instead of silently using defaults.
fn load_settings(store: &FileSettingsStore) -> Result<Settings> {
    Ok(store.load()?.unwrap_or_default())
}

/// Load, change and save the settings object. Load and save failures are
/// returned so a corrupt file is never replaced by defaults.
fn update_settings(store: &FileSettingsStore, change: impl FnOnce(&mut Settings)) -> Result<()> {
    let mut settings = load_settings(store)?;
    change(&mut settings);
    store.save(&settings)?;
    log::info!("Updated settings at {:?}", store.path());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cli_for(path: &std::path::Path, args: &[&str]) -> Cli {
        let mut argv = vec!["pane-sync", "--settings", path.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_toggles_write_settings_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data.json");

        run(cli_for(&path, &["disable"])).unwrap();
        run(cli_for(&path, &["auto-restore", "on"])).unwrap();

        let settings = FileSettingsStore::new(&path).load().unwrap().unwrap();
        assert!(!settings.enabled);
        assert!(settings.auto_restore_links);
    }

    #[test]
    fn test_clear_pairs() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data.json");
        let store = FileSettingsStore::new(&path);
        store
            .save(&Settings::new().with_saved_pairs(["a.md", "b.md"]))
            .unwrap();

        run(cli_for(&path, &["clear-pairs"])).unwrap();
        assert!(store.load().unwrap().unwrap().saved_pairs.is_empty());
    }

    #[test]
    fn test_toggle_keeps_corrupt_file_intact() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data.json");
        let corrupt = r#"{ "savedPairs": ["keep.md"], "enabled": "#;
        std::fs::write(&path, corrupt).unwrap();

        assert!(run(cli_for(&path, &["disable"])).is_err());
        assert!(run(cli_for(&path, &["auto-restore", "on"])).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), corrupt);
    }

    #[test]
    fn test_toggle_reports_failed_save() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("data.json");

        assert!(run(cli_for(&path, &["enable"])).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_show_reports_corrupt_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data.json");
        std::fs::write(&path, "[[[").unwrap();
        assert!(run(cli_for(&path, &["show"])).is_err());
    }
}
