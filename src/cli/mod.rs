//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use types::Position;

use crate::analytics::{DEFAULT_LEADER_COUNT, DEFAULT_MIN_TARGETS};

/// Output switch shared by every command
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,
}

/// Which target-depth board to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetBoard {
    /// Highest share of deep (20+ yard) targets
    Deep,
    /// Most total targets
    Volume,
    /// Most targets by the `targets` column, unfiltered
    Targets,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show which datasets loaded and headline counts
    Status,

    /// Target-depth profile for one player (lists players when omitted).
    Player {
        /// Exact player name as it appears in the target-depth data.
        name: Option<String>,

        /// Team code, to disambiguate players sharing a name.
        #[clap(long, short)]
        team: Option<String>,
    },

    /// Best pass defenses in stored rank order.
    Defenses {
        /// Number of defenses to show.
        #[clap(long, short = 'n', default_value_t = DEFAULT_LEADER_COUNT)]
        limit: usize,
    },

    /// Target-depth leader boards.
    Targets {
        /// Board to show.
        #[clap(long, value_enum, default_value_t = TargetBoard::Deep)]
        board: TargetBoard,

        /// Minimum season targets to qualify.
        #[clap(long, default_value_t = DEFAULT_MIN_TARGETS)]
        min_targets: u32,

        /// Filter by position (repeatable): `-p WR -p TE`.
        #[clap(short = 'p', long = "position")]
        positions: Option<Vec<Position>>,

        /// Number of players to show.
        #[clap(long, short = 'n', default_value_t = DEFAULT_LEADER_COUNT)]
        limit: usize,
    },

    /// League pace ranking by plays per game, fastest first.
    Pace {
        /// Show the slowest teams instead of the fastest.
        #[clap(long)]
        slowest: bool,

        /// Number of teams to show (all when omitted).
        #[clap(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Pace, weekly stats and target data for one team.
    Team {
        /// Team code as used in the datasets (lists teams when omitted).
        team: Option<String>,
    },

    /// The 32 franchises and their ESPN ids.
    Teams,

    /// Live injury report from ESPN.
    Injuries {
        /// Team abbreviation, e.g. `KC`.
        team: String,

        /// Number of injury references to show.
        #[clap(long, short = 'n', default_value_t = 10)]
        limit: usize,
    },

    /// Live depth chart from ESPN.
    DepthChart {
        /// Team abbreviation, e.g. `KC`.
        team: String,

        /// Slots shown per formation.
        #[clap(long, default_value_t = 9)]
        slots: usize,

        /// Athletes shown per slot.
        #[clap(long, default_value_t = 3)]
        athletes: usize,
    },

    /// Live roster from ESPN.
    Roster {
        /// Team abbreviation, e.g. `KC`.
        team: String,
    },

    /// League-wide transactions from ESPN.
    Transactions {
        /// Number of transaction references to show.
        #[clap(long, short = 'n', default_value_t = 10)]
        limit: usize,
    },

    /// ESPN's own team index.
    EspnTeams,
}

#[derive(Debug, Parser)]
#[clap(name = "nfl-analytics", about = "NFL stats and live ESPN data from the command line")]
pub struct NflAnalytics {
    /// Directory holding the CSV datasets (or set `NFL_DATA_DIR`).
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log dataset loading and API calls.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(flatten)]
    pub output: OutputArgs,

    #[clap(subcommand)]
    pub command: Commands,
}
