//! Dataset identities and the column contract each source file must meet

use std::{fmt, str::FromStr};

use csv::StringRecord;
use serde::Serialize;

use crate::error::AnalyticsError;

/// The five canonical tabular datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    DefensiveRankings,
    TargetDepth,
    GameScript,
    WeeklyStats,
    Rosters,
}

/// A required column, with any accepted alternative header names.
pub type ColumnSpec = &'static [&'static str];

const DEFENSIVE_COLUMNS: &[ColumnSpec] = &[
    &["team"],
    &["receiving_yards_allowed_per_game"],
    &["fantasy_points_allowed_per_game"],
    &["targets_allowed_per_game"],
    &["receptions_allowed_per_game"],
];

const TARGET_DEPTH_COLUMNS: &[ColumnSpec] = &[
    &["player_name"],
    &["recent_team"],
    &["position"],
    &["targets"],
    &["total_targets"],
    &["total_receptions"],
    &["total_receiving_yards"],
    &["short_target_percentage"],
    &["medium_target_percentage"],
    &["deep_target_percentage"],
    &["avg_air_yards"],
    &["avg_yac"],
    &["target_share"],
];

const GAME_SCRIPT_COLUMNS: &[ColumnSpec] = &[
    &["recent_team"],
    &["pace_category"],
    &["offensive_style"],
    &["plays_per_game_rank"],
    &["yards_per_play_rank"],
    &["pass_rate_rank"],
    &["total_plays"],
    &["yards_per_play"],
    &["fantasy_points"],
];

const WEEKLY_STATS_COLUMNS: &[ColumnSpec] = &[&["player_name"], &["recent_team"]];

const ROSTER_COLUMNS: &[ColumnSpec] = &[
    &["player_name", "full_name", "name"],
    &["team", "recent_team"],
];

impl DatasetKind {
    pub const ALL: [DatasetKind; 5] = [
        DatasetKind::DefensiveRankings,
        DatasetKind::TargetDepth,
        DatasetKind::GameScript,
        DatasetKind::WeeklyStats,
        DatasetKind::Rosters,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::DefensiveRankings => "defensive_rankings",
            DatasetKind::TargetDepth => "target_depth",
            DatasetKind::GameScript => "game_script",
            DatasetKind::WeeklyStats => "weekly_stats",
            DatasetKind::Rosters => "rosters",
        }
    }

    /// File name relative to the data directory.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            DatasetKind::DefensiveRankings => "real_defensive_rankings_2024.csv",
            DatasetKind::TargetDepth => "target_depth_analysis_2024.csv",
            DatasetKind::GameScript => "game_script_analysis_2024.csv",
            DatasetKind::WeeklyStats => "player_stats/2024_weekly_stats.csv",
            DatasetKind::Rosters => "enhanced_rosters.csv",
        }
    }

    pub fn required_columns(&self) -> &'static [ColumnSpec] {
        match self {
            DatasetKind::DefensiveRankings => DEFENSIVE_COLUMNS,
            DatasetKind::TargetDepth => TARGET_DEPTH_COLUMNS,
            DatasetKind::GameScript => GAME_SCRIPT_COLUMNS,
            DatasetKind::WeeklyStats => WEEKLY_STATS_COLUMNS,
            DatasetKind::Rosters => ROSTER_COLUMNS,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AnalyticsError::UnknownDataset {
                name: s.to_string(),
            })
    }
}

/// Find the header index for a column, trying each accepted name in order.
pub fn column_index(headers: &StringRecord, names: ColumnSpec) -> Option<usize> {
    names
        .iter()
        .find_map(|name| headers.iter().position(|h| h.trim() == *name))
}

/// Check that every required column is present.
///
/// Returns the primary names of the missing columns.
pub fn missing_columns(kind: DatasetKind, headers: &StringRecord) -> Vec<&'static str> {
    kind.required_columns()
        .iter()
        .filter(|spec| column_index(headers, spec).is_none())
        .map(|spec| spec[0])
        .collect()
}
