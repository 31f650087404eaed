//! Dataset store for the NFL analytics core
//!
//! Loads the five canonical CSV datasets once and exposes them as immutable,
//! typed tables:
//! - `schema`: dataset identities and required columns
//! - `models`: typed row structs
//! - `loader`: CSV parsing and header validation
//!
//! A dataset is either fully loaded (non-empty, schema-valid) or absent.
//! Missing files degrade to an empty, unavailable table; malformed files
//! abort the load with [`AnalyticsError::DatasetCorrupt`].

pub mod loader;
pub mod models;
pub mod schema;

#[cfg(test)]
mod tests;

use std::{collections::BTreeMap, collections::BTreeSet, path::PathBuf};

use serde::Serialize;
use tracing::{info, warn};

pub use models::*;
pub use schema::DatasetKind;

use crate::{config::DataSources, error::AnalyticsError, Result};

/// What happened to one dataset during load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    Loaded { path: PathBuf, rows: usize },
    /// File absent, or no location configured.
    Missing { path: Option<PathBuf> },
    /// File present with a valid header but no rows.
    Empty { path: PathBuf },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Per-dataset load results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    pub outcomes: BTreeMap<DatasetKind, LoadOutcome>,
}

impl LoadReport {
    /// Datasets that did not load, with their outcome.
    pub fn failures(&self) -> impl Iterator<Item = (DatasetKind, &LoadOutcome)> {
        self.outcomes
            .iter()
            .filter(|(_, o)| !o.is_loaded())
            .map(|(k, o)| (*k, o))
    }

    pub fn all_loaded(&self) -> bool {
        DatasetKind::ALL
            .iter()
            .all(|k| self.outcomes.get(k).is_some_and(LoadOutcome::is_loaded))
    }
}

/// Raw tables for building a store without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct DatasetTables {
    pub defensive_rankings: Vec<DefensiveRanking>,
    pub target_depth: Vec<TargetDepthRecord>,
    pub game_script: Vec<GameScriptRecord>,
    pub weekly_stats: Vec<WeeklyPlayerStat>,
    pub rosters: Vec<RosterEntry>,
}

impl DatasetTables {
    fn row_count(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::DefensiveRankings => self.defensive_rankings.len(),
            DatasetKind::TargetDepth => self.target_depth.len(),
            DatasetKind::GameScript => self.game_script.len(),
            DatasetKind::WeeklyStats => self.weekly_stats.len(),
            DatasetKind::Rosters => self.rosters.len(),
        }
    }
}

/// Headline counts for a status view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub datasets: BTreeMap<DatasetKind, DatasetStatus>,
    /// Distinct player names in the weekly stats.
    pub players_analyzed: usize,
    /// Player-week rows.
    pub games_analyzed: usize,
    /// Game-script rows.
    pub teams_covered: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetStatus {
    pub available: bool,
    pub rows: usize,
}

/// Borrowed view of one dataset's rows.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Table<'a> {
    DefensiveRankings(&'a [DefensiveRanking]),
    TargetDepth(&'a [TargetDepthRecord]),
    GameScript(&'a [GameScriptRecord]),
    WeeklyStats(&'a [WeeklyPlayerStat]),
    Rosters(&'a [RosterEntry]),
}

impl Table<'_> {
    pub fn len(&self) -> usize {
        match self {
            Table::DefensiveRankings(rows) => rows.len(),
            Table::TargetDepth(rows) => rows.len(),
            Table::GameScript(rows) => rows.len(),
            Table::WeeklyStats(rows) => rows.len(),
            Table::Rosters(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable snapshot of every dataset, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    tables: DatasetTables,
    report: LoadReport,
}

impl DatasetStore {
    /// Load every dataset named in `sources`.
    ///
    /// Missing files are recorded in the report and leave that table empty;
    /// any other read or schema failure is returned as an error.
    pub fn load(sources: &DataSources) -> Result<Self> {
        let mut tables = DatasetTables::default();
        let mut report = LoadReport::default();

        for kind in DatasetKind::ALL {
            let outcome = Self::load_one(kind, sources, &mut tables)?;
            match &outcome {
                LoadOutcome::Loaded { path, rows } => {
                    info!(dataset = %kind, rows, path = %path.display(), "dataset loaded");
                }
                LoadOutcome::Missing { path } => {
                    warn!(dataset = %kind, path = ?path, "dataset file not found");
                }
                LoadOutcome::Empty { path } => {
                    warn!(dataset = %kind, path = %path.display(), "dataset file has no rows");
                }
            }
            report.outcomes.insert(kind, outcome);
        }

        Ok(Self { tables, report })
    }

    fn load_one(
        kind: DatasetKind,
        sources: &DataSources,
        tables: &mut DatasetTables,
    ) -> Result<LoadOutcome> {
        let Some(path) = sources.path(kind) else {
            return Ok(LoadOutcome::Missing { path: None });
        };
        let Some(file) = loader::open_source(path)? else {
            return Ok(LoadOutcome::Missing {
                path: Some(path.to_path_buf()),
            });
        };

        let source = path.display().to_string();
        match kind {
            DatasetKind::DefensiveRankings => {
                tables.defensive_rankings = loader::read_typed(kind, &source, file)?;
            }
            DatasetKind::TargetDepth => {
                tables.target_depth = loader::read_typed(kind, &source, file)?;
            }
            DatasetKind::GameScript => {
                tables.game_script = loader::read_typed(kind, &source, file)?;
            }
            DatasetKind::WeeklyStats => {
                tables.weekly_stats = loader::read_weekly_stats(&source, file)?;
            }
            DatasetKind::Rosters => {
                tables.rosters = loader::read_rosters(&source, file)?;
            }
        }

        let rows = tables.row_count(kind);
        if rows == 0 {
            return Ok(LoadOutcome::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(LoadOutcome::Loaded {
            path: path.to_path_buf(),
            rows,
        })
    }

    /// Build a store from in-memory tables; non-empty tables count as loaded.
    pub fn from_tables(tables: DatasetTables) -> Self {
        let mut report = LoadReport::default();
        for kind in DatasetKind::ALL {
            let rows = tables.row_count(kind);
            let outcome = if rows > 0 {
                LoadOutcome::Loaded {
                    path: PathBuf::from(format!("<memory:{kind}>")),
                    rows,
                }
            } else {
                LoadOutcome::Missing { path: None }
            };
            report.outcomes.insert(kind, outcome);
        }
        Self { tables, report }
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn is_available(&self, kind: DatasetKind) -> bool {
        self.report
            .outcomes
            .get(&kind)
            .is_some_and(LoadOutcome::is_loaded)
    }

    /// Availability by dataset name; unknown names are reported unavailable.
    pub fn is_available_by_name(&self, name: &str) -> bool {
        name.parse::<DatasetKind>()
            .map(|kind| self.is_available(kind))
            .unwrap_or(false)
    }

    /// Fail with `DatasetUnavailable` unless `kind` loaded.
    pub fn require(&self, kind: DatasetKind) -> Result<()> {
        if self.is_available(kind) {
            Ok(())
        } else {
            Err(AnalyticsError::DatasetUnavailable {
                dataset: kind.name().to_string(),
            })
        }
    }

    pub fn row_count(&self, kind: DatasetKind) -> usize {
        self.tables.row_count(kind)
    }

    /// Rows of one dataset; empty when it did not load.
    pub fn table(&self, kind: DatasetKind) -> Table<'_> {
        match kind {
            DatasetKind::DefensiveRankings => Table::DefensiveRankings(self.defensive_rankings()),
            DatasetKind::TargetDepth => Table::TargetDepth(self.target_depth()),
            DatasetKind::GameScript => Table::GameScript(self.game_script()),
            DatasetKind::WeeklyStats => Table::WeeklyStats(self.weekly_stats()),
            DatasetKind::Rosters => Table::Rosters(self.rosters()),
        }
    }

    /// Table by dataset name. Never fails for one of the five known names.
    pub fn get(&self, name: &str) -> Result<Table<'_>> {
        Ok(self.table(name.parse()?))
    }

    pub fn defensive_rankings(&self) -> &[DefensiveRanking] {
        &self.tables.defensive_rankings
    }

    pub fn target_depth(&self) -> &[TargetDepthRecord] {
        &self.tables.target_depth
    }

    pub fn game_script(&self) -> &[GameScriptRecord] {
        &self.tables.game_script
    }

    pub fn weekly_stats(&self) -> &[WeeklyPlayerStat] {
        &self.tables.weekly_stats
    }

    pub fn rosters(&self) -> &[RosterEntry] {
        &self.tables.rosters
    }

    /// Distinct target-depth player names, sorted.
    pub fn player_names(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self
            .tables
            .target_depth
            .iter()
            .map(|r| r.player_name.as_str())
            .collect();
        names.into_iter().collect()
    }

    /// Distinct game-script team codes, sorted.
    pub fn team_codes(&self) -> Vec<&str> {
        let teams: BTreeSet<&str> = self
            .tables
            .game_script
            .iter()
            .map(|r| r.recent_team.as_str())
            .collect();
        teams.into_iter().collect()
    }

    pub fn summary(&self) -> DatasetSummary {
        let datasets = DatasetKind::ALL
            .into_iter()
            .map(|kind| {
                (
                    kind,
                    DatasetStatus {
                        available: self.is_available(kind),
                        rows: self.row_count(kind),
                    },
                )
            })
            .collect();

        let players: BTreeSet<&str> = self
            .tables
            .weekly_stats
            .iter()
            .map(|r| r.player_name.as_str())
            .collect();

        DatasetSummary {
            datasets,
            players_analyzed: players.len(),
            games_analyzed: self.tables.weekly_stats.len(),
            teams_covered: self.tables.game_script.len(),
        }
    }
}
