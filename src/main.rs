//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use nfl_analytics::{
    cli::{Commands, NflAnalytics},
    commands::{datasets, live, players, teams},
    config::{DataSources, EspnConfig},
    espn::EspnClient,
    DatasetStore,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_store(data_dir: Option<PathBuf>) -> anyhow::Result<DatasetStore> {
    let sources = DataSources::resolve(data_dir);
    DatasetStore::load(&sources).context("failed to load datasets")
}

fn espn_client() -> anyhow::Result<EspnClient> {
    EspnClient::new(&EspnConfig::from_env()).context("failed to build ESPN client")
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = NflAnalytics::parse();
    init_logging(app.verbose);
    let as_json = app.output.json;
    let data_dir = app.data_dir;

    match app.command {
        Commands::Status => datasets::handle_status(&load_store(data_dir)?, as_json)?,
        Commands::Player { name, team } => players::handle_player(
            &load_store(data_dir)?,
            name.as_deref(),
            team.as_deref(),
            as_json,
        )?,
        Commands::Defenses { limit } => {
            teams::handle_defenses(&load_store(data_dir)?, limit, as_json)?
        }
        Commands::Targets {
            board,
            min_targets,
            positions,
            limit,
        } => players::handle_targets(
            &load_store(data_dir)?,
            board,
            min_targets,
            positions.as_deref(),
            limit,
            as_json,
        )?,
        Commands::Pace { slowest, limit } => {
            teams::handle_pace(&load_store(data_dir)?, slowest, limit, as_json)?
        }
        Commands::Team { team } => {
            teams::handle_team(&load_store(data_dir)?, team.as_deref(), as_json)?
        }
        Commands::Teams => teams::handle_teams(as_json)?,

        Commands::Injuries { team, limit } => {
            live::handle_injuries(&espn_client()?, &team, limit, as_json).await?
        }
        Commands::DepthChart {
            team,
            slots,
            athletes,
        } => live::handle_depth_chart(&espn_client()?, &team, slots, athletes, as_json).await?,
        Commands::Roster { team } => live::handle_roster(&espn_client()?, &team, as_json).await?,
        Commands::Transactions { limit } => {
            live::handle_transactions(&espn_client()?, limit, as_json).await?
        }
        Commands::EspnTeams => live::handle_espn_teams(&espn_client()?, as_json).await?,
    }

    Ok(())
}
