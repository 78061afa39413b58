use anyhow::Result;
use pane_sync::cli;

fn main() -> Result<()> {
    let result = cli::process_cli();
    if let Err(ref e) = result {
        log::error!("pane-sync failed: {e:#}");
        eprintln!("pane-sync: error: {e:#}");
    }
    result
}
