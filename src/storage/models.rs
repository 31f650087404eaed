//! Typed records for each dataset

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{de::Error, Deserialize, Deserializer, Serialize};

/// Empty cells read as zero; anything else must parse as a number.
fn de_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .map_err(|_| D::Error::custom(format!("expected a number, found {raw:?}")))
}

/// Whole, non-negative counts. Accepts float renderings such as `25.0`.
fn de_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = de_float(deserializer)?;
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(D::Error::custom(format!(
            "expected a non-negative whole number, found {value}"
        )));
    }
    Ok(value as u32)
}

fn de_pace_category<'de, D>(deserializer: D) -> Result<PaceCategory, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

/// One team's pass defense line for the season.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DefensiveRanking {
    pub team: String,
    #[serde(deserialize_with = "de_float")]
    pub receiving_yards_allowed_per_game: f64,
    #[serde(deserialize_with = "de_float")]
    pub fantasy_points_allowed_per_game: f64,
    #[serde(deserialize_with = "de_float")]
    pub targets_allowed_per_game: f64,
    #[serde(deserialize_with = "de_float")]
    pub receptions_allowed_per_game: f64,
}

/// One player's season target distribution.
///
/// `targets` and `total_targets` are tracked separately upstream and are
/// kept as distinct fields.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TargetDepthRecord {
    pub player_name: String,
    pub recent_team: String,
    pub position: String,
    #[serde(deserialize_with = "de_float")]
    pub targets: f64,
    #[serde(deserialize_with = "de_count")]
    pub total_targets: u32,
    #[serde(deserialize_with = "de_count")]
    pub total_receptions: u32,
    #[serde(deserialize_with = "de_float")]
    pub total_receiving_yards: f64,
    #[serde(deserialize_with = "de_float")]
    pub short_target_percentage: f64,
    #[serde(deserialize_with = "de_float")]
    pub medium_target_percentage: f64,
    #[serde(deserialize_with = "de_float")]
    pub deep_target_percentage: f64,
    #[serde(deserialize_with = "de_float")]
    pub avg_air_yards: f64,
    #[serde(deserialize_with = "de_float")]
    pub avg_yac: f64,
    #[serde(deserialize_with = "de_float")]
    pub target_share: f64,
}

/// Pace label carried by the game-script table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceCategory {
    Fast,
    Medium,
    Slow,
}

impl fmt::Display for PaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaceCategory::Fast => "Fast",
            PaceCategory::Medium => "Medium",
            PaceCategory::Slow => "Slow",
        };
        f.write_str(s)
    }
}

impl FromStr for PaceCategory {
    type Err = String;

    /// Accepts the bare label or decorated forms like `Fast Pace`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower.contains("fast") {
            Ok(PaceCategory::Fast)
        } else if lower.contains("slow") {
            Ok(PaceCategory::Slow)
        } else if lower.contains("medium") || lower.contains("average") || lower.contains("moderate")
        {
            Ok(PaceCategory::Medium)
        } else {
            Err(format!("unknown pace category {s:?}"))
        }
    }
}

/// One team's tempo and style profile.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameScriptRecord {
    pub recent_team: String,
    #[serde(deserialize_with = "de_pace_category")]
    pub pace_category: PaceCategory,
    pub offensive_style: String,
    #[serde(deserialize_with = "de_count")]
    pub plays_per_game_rank: u32,
    #[serde(deserialize_with = "de_count")]
    pub yards_per_play_rank: u32,
    #[serde(deserialize_with = "de_count")]
    pub pass_rate_rank: u32,
    /// Plays per game.
    #[serde(deserialize_with = "de_float")]
    pub total_plays: f64,
    #[serde(deserialize_with = "de_float")]
    pub yards_per_play: f64,
    #[serde(deserialize_with = "de_float")]
    pub fantasy_points: f64,
}

/// One player-week row. Columns beyond the keys are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPlayerStat {
    pub player_name: String,
    pub recent_team: String,
    pub week: Option<u16>,
    pub fields: BTreeMap<String, String>,
}

impl WeeklyPlayerStat {
    /// Numeric value of a per-week metric column, if present and numeric.
    pub fn metric(&self, column: &str) -> Option<f64> {
        self.fields.get(column)?.trim().parse().ok()
    }
}

/// One player's roster row with whatever biographical columns the file has.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub player_name: String,
    pub team: String,
    pub fields: BTreeMap<String, String>,
}

impl RosterEntry {
    pub fn field(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}
