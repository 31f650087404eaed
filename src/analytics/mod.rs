//! Cross-dataset queries over a loaded [`DatasetStore`].
//!
//! Every query is a pure function of the store's tables at call time.
//! Rankings are computed from the rows on each call; no stored rank column
//! is consulted. Queries against an unavailable dataset fail with
//! [`AnalyticsError::DatasetUnavailable`], which callers keep separate from
//! the record-not-found variants.

pub mod pace;


use std::cmp::Ordering;

use serde::Serialize;

pub use pace::PaceTier;

use crate::{
    cli::types::Position,
    error::AnalyticsError,
    storage::{
        DatasetKind, DatasetStore, DefensiveRanking, GameScriptRecord, TargetDepthRecord,
        WeeklyPlayerStat,
    },
    Result,
};

/// Minimum season targets for the target-depth leader boards.
pub const DEFAULT_MIN_TARGETS: u32 = 20;
/// Rows shown per leader board.
pub const DEFAULT_LEADER_COUNT: usize = 10;

/// A defense with its display rank (1-based position in stored order).
#[derive(Debug, Clone, Serialize)]
pub struct RankedDefense<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub defense: &'a DefensiveRanking,
}

/// A team's pace row with its derived tier.
#[derive(Debug, Clone, Serialize)]
pub struct PaceEntry<'a> {
    pub tier: PaceTier,
    #[serde(flatten)]
    pub record: &'a GameScriptRecord,
}

/// Plot-ready pace vs. efficiency point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaceEfficiencyPoint {
    pub team: String,
    pub total_plays: f64,
    pub yards_per_play: f64,
    pub fantasy_points: f64,
}

/// Every per-team row across the joinable tables.
#[derive(Debug, Clone, Serialize)]
pub struct TeamCompositeView<'a> {
    pub team: String,
    pub pace: Option<&'a GameScriptRecord>,
    pub weekly_stats: Vec<&'a WeeklyPlayerStat>,
    pub targets: Vec<&'a TargetDepthRecord>,
}

impl TeamCompositeView<'_> {
    pub fn is_empty(&self) -> bool {
        self.pace.is_none() && self.weekly_stats.is_empty() && self.targets.is_empty()
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Stateless query layer borrowing an immutable dataset snapshot.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsQueryService<'a> {
    store: &'a DatasetStore,
}

impl<'a> AnalyticsQueryService<'a> {
    pub fn new(store: &'a DatasetStore) -> Self {
        Self { store }
    }

    fn target_depth(&self) -> Result<&'a [TargetDepthRecord]> {
        self.store.require(DatasetKind::TargetDepth)?;
        Ok(self.store.target_depth())
    }

    fn game_script(&self) -> Result<&'a [GameScriptRecord]> {
        self.store.require(DatasetKind::GameScript)?;
        Ok(self.store.game_script())
    }

    fn defenses(&self) -> Result<&'a [DefensiveRanking]> {
        self.store.require(DatasetKind::DefensiveRankings)?;
        Ok(self.store.defensive_rankings())
    }

    /// First target-depth row whose `player_name` matches exactly.
    ///
    /// Player names are not unique across teams; when two rows share a name
    /// this returns the first in table order. Use
    /// [`player_target_profile_on_team`](Self::player_target_profile_on_team)
    /// to disambiguate.
    pub fn player_target_profile(&self, player_name: &str) -> Result<&'a TargetDepthRecord> {
        self.target_depth()?
            .iter()
            .find(|r| r.player_name == player_name)
            .ok_or_else(|| AnalyticsError::PlayerNotFound {
                name: player_name.to_string(),
            })
    }

    /// Lookup on the (`player_name`, `recent_team`) composite key.
    pub fn player_target_profile_on_team(
        &self,
        player_name: &str,
        team: &str,
    ) -> Result<&'a TargetDepthRecord> {
        self.target_depth()?
            .iter()
            .find(|r| r.player_name == player_name && r.recent_team == team)
            .ok_or_else(|| AnalyticsError::PlayerNotFound {
                name: format!("{player_name} ({team})"),
            })
    }

    /// Teams a player name appears under in the target-depth table.
    pub fn teams_for_player(&self, player_name: &str) -> Result<Vec<&'a str>> {
        Ok(self
            .target_depth()?
            .iter()
            .filter(|r| r.player_name == player_name)
            .map(|r| r.recent_team.as_str())
            .collect())
    }

    /// First `n` defenses in stored order (the file is expected rank-sorted).
    pub fn top_defenses(&self, n: usize) -> Result<Vec<RankedDefense<'a>>> {
        Ok(self
            .defenses()?
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, defense)| RankedDefense {
                rank: i + 1,
                defense,
            })
            .collect())
    }

    /// 1-based rank of `team` by ascending receiving yards allowed per game.
    pub fn defensive_rank(&self, team: &str) -> Result<usize> {
        let mut ordered: Vec<&DefensiveRanking> = self.defenses()?.iter().collect();
        ordered.sort_by(|a, b| {
            a.receiving_yards_allowed_per_game
                .total_cmp(&b.receiving_yards_allowed_per_game)
        });
        ordered
            .iter()
            .position(|d| d.team == team)
            .map(|i| i + 1)
            .ok_or_else(|| AnalyticsError::TeamNotFound {
                team: team.to_string(),
            })
    }

    /// Top `n` players by the `targets` column, descending.
    pub fn top_target_volume(&self, n: usize) -> Result<Vec<&'a TargetDepthRecord>> {
        let mut rows: Vec<&TargetDepthRecord> = self.target_depth()?.iter().collect();
        rows.sort_by(|a, b| descending(a.targets, b.targets));
        rows.truncate(n);
        Ok(rows)
    }

    /// Rows with at least `min_targets`, optionally limited to `positions`.
    ///
    /// Returned in table order; callers sort by the metric they display.
    pub fn qualified_target_leaders(
        &self,
        min_targets: u32,
        positions: Option<&[Position]>,
    ) -> Result<Vec<&'a TargetDepthRecord>> {
        Ok(self
            .target_depth()?
            .iter()
            .filter(|r| r.total_targets >= min_targets)
            .filter(|r| positions.map_or(true, |ps| ps.iter().any(|p| p.matches(&r.position))))
            .collect())
    }

    /// Qualified players with the highest deep-target share.
    pub fn deep_target_leaders(
        &self,
        min_targets: u32,
        positions: Option<&[Position]>,
        n: usize,
    ) -> Result<Vec<&'a TargetDepthRecord>> {
        let mut rows = self.qualified_target_leaders(min_targets, positions)?;
        rows.sort_by(|a, b| descending(a.deep_target_percentage, b.deep_target_percentage));
        rows.truncate(n);
        Ok(rows)
    }

    /// Qualified players with the most total targets.
    pub fn volume_leaders(
        &self,
        min_targets: u32,
        positions: Option<&[Position]>,
        n: usize,
    ) -> Result<Vec<&'a TargetDepthRecord>> {
        let mut rows = self.qualified_target_leaders(min_targets, positions)?;
        rows.sort_by(|a, b| b.total_targets.cmp(&a.total_targets));
        rows.truncate(n);
        Ok(rows)
    }

    pub fn team_pace_profile(&self, team: &str) -> Result<&'a GameScriptRecord> {
        self.game_script()?
            .iter()
            .find(|r| r.recent_team == team)
            .ok_or_else(|| AnalyticsError::TeamNotFound {
                team: team.to_string(),
            })
    }

    /// Every team sorted by plays per game; `ascending == false` puts the
    /// fastest first.
    pub fn pace_ranking(&self, ascending: bool) -> Result<Vec<&'a GameScriptRecord>> {
        let mut rows: Vec<&GameScriptRecord> = self.game_script()?.iter().collect();
        if ascending {
            rows.sort_by(|a, b| a.total_plays.total_cmp(&b.total_plays));
        } else {
            rows.sort_by(|a, b| descending(a.total_plays, b.total_plays));
        }
        Ok(rows)
    }

    /// The `n` fastest teams, fastest first.
    pub fn fastest_teams(&self, n: usize) -> Result<Vec<PaceEntry<'a>>> {
        Ok(self
            .pace_ranking(false)?
            .into_iter()
            .take(n)
            .map(Self::pace_entry)
            .collect())
    }

    /// The `n` slowest teams, in fastest-first order (slowest last).
    pub fn slowest_teams(&self, n: usize) -> Result<Vec<PaceEntry<'a>>> {
        let ranking = self.pace_ranking(false)?;
        let skip = ranking.len().saturating_sub(n);
        Ok(ranking.into_iter().skip(skip).map(Self::pace_entry).collect())
    }

    fn pace_entry(record: &'a GameScriptRecord) -> PaceEntry<'a> {
        PaceEntry {
            tier: PaceTier::from_plays(record.total_plays),
            record,
        }
    }

    /// League-wide pace vs. efficiency, in table order.
    pub fn pace_efficiency_points(&self) -> Result<Vec<PaceEfficiencyPoint>> {
        Ok(self
            .game_script()?
            .iter()
            .map(|r| PaceEfficiencyPoint {
                team: r.recent_team.clone(),
                total_plays: r.total_plays,
                yards_per_play: r.yards_per_play,
                fantasy_points: r.fantasy_points,
            })
            .collect())
    }

    /// Gather every row for `team` across game script, weekly stats and
    /// target depth. Empty or unavailable tables contribute nothing.
    pub fn team_composite_view(&self, team: &str) -> TeamCompositeView<'a> {
        TeamCompositeView {
            team: team.to_string(),
            pace: self
                .store
                .game_script()
                .iter()
                .find(|r| r.recent_team == team),
            weekly_stats: self
                .store
                .weekly_stats()
                .iter()
                .filter(|r| r.recent_team == team)
                .collect(),
            targets: self
                .store
                .target_depth()
                .iter()
                .filter(|r| r.recent_team == team)
                .collect(),
        }
    }
}
