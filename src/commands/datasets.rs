//! Dataset status command

use crate::{storage::DatasetStore, Result};

use super::common::print_json;

/// Handle the status command
pub fn handle_status(store: &DatasetStore, as_json: bool) -> Result<()> {
    let summary = store.summary();
    if as_json {
        return print_json(&summary);
    }

    for (kind, status) in &summary.datasets {
        if status.available {
            println!("✓ {kind}: {} rows", status.rows);
        } else {
            println!("⚠ {kind}: not available");
        }
    }

    if summary.games_analyzed > 0 {
        println!();
        println!("Players analyzed: {}", summary.players_analyzed);
        println!("Games analyzed:   {}", summary.games_analyzed);
        println!("Teams covered:    {}", summary.teams_covered);
    }
    Ok(())
}
