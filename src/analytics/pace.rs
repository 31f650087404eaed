//! Pace tiers for plays-per-game listings

use serde::Serialize;
use std::fmt;

/// Plays per game above which a team counts as high pace.
pub const HIGH_PACE_PLAYS: f64 = 70.0;
/// Plays per game above which a team counts as at least medium pace.
pub const MEDIUM_PACE_PLAYS: f64 = 65.0;

/// Tempo band derived from plays per game, recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceTier {
    High,
    Medium,
    Low,
}

impl PaceTier {
    pub fn from_plays(plays_per_game: f64) -> Self {
        if plays_per_game > HIGH_PACE_PLAYS {
            PaceTier::High
        } else if plays_per_game > MEDIUM_PACE_PLAYS {
            PaceTier::Medium
        } else {
            PaceTier::Low
        }
    }
}

impl fmt::Display for PaceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaceTier::High => "high",
            PaceTier::Medium => "medium",
            PaceTier::Low => "low",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(PaceTier::from_plays(72.0), PaceTier::High);
        assert_eq!(PaceTier::from_plays(70.0), PaceTier::Medium);
        assert_eq!(PaceTier::from_plays(65.5), PaceTier::Medium);
        assert_eq!(PaceTier::from_plays(65.0), PaceTier::Low);
        assert_eq!(PaceTier::from_plays(58.0), PaceTier::Low);
    }
}
