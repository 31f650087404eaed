//! Static mapping between NFL team abbreviations and ESPN team ids.

use serde::Serialize;

use crate::{cli::types::TeamId, error::AnalyticsError, Result};


/// One league franchise as known to the ESPN API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamRecord {
    pub abbreviation: &'static str,
    pub external_id: TeamId,
}

const fn team(abbreviation: &'static str, id: u32) -> TeamRecord {
    TeamRecord {
        abbreviation,
        external_id: TeamId(id),
    }
}

/// All 32 franchises, alphabetical by abbreviation.
const TEAMS: [TeamRecord; 32] = [
    team("ARI", 22),
    team("ATL", 1),
    team("BAL", 33),
    team("BUF", 2),
    team("CAR", 29),
    team("CHI", 3),
    team("CIN", 4),
    team("CLE", 5),
    team("DAL", 6),
    team("DEN", 7),
    team("DET", 8),
    team("GB", 9),
    team("HOU", 34),
    team("IND", 11),
    team("JAX", 30),
    team("KC", 12),
    team("LAC", 24),
    team("LAR", 14),
    team("LV", 13),
    team("MIA", 15),
    team("MIN", 16),
    team("NE", 17),
    team("NO", 18),
    team("NYG", 19),
    team("NYJ", 20),
    team("PHI", 21),
    team("PIT", 23),
    team("SEA", 26),
    team("SF", 25),
    team("TB", 27),
    team("TEN", 10),
    team("WAS", 28),
];

/// Fixed lookup table; there is nothing to construct or mutate.
pub struct TeamRegistry;

impl TeamRegistry {
    /// Resolve a team abbreviation (case-insensitive) to its ESPN team id.
    pub fn resolve(abbreviation: &str) -> Result<TeamId> {
        Self::find(abbreviation)
            .map(|t| t.external_id)
            .ok_or_else(|| AnalyticsError::UnknownTeam {
                abbreviation: abbreviation.to_string(),
            })
    }

    /// Look up the full record for an abbreviation.
    pub fn find(abbreviation: &str) -> Option<TeamRecord> {
        let wanted = abbreviation.trim();
        TEAMS
            .iter()
            .find(|t| t.abbreviation.eq_ignore_ascii_case(wanted))
            .copied()
    }

    /// Reverse lookup from an ESPN team id.
    pub fn abbreviation_for(id: TeamId) -> Option<&'static str> {
        TEAMS
            .iter()
            .find(|t| t.external_id == id)
            .map(|t| t.abbreviation)
    }

    /// Every franchise, sorted alphabetically by abbreviation.
    pub fn all_teams() -> Vec<TeamRecord> {
        let mut teams = TEAMS.to_vec();
        teams.sort_by(|a, b| a.abbreviation.cmp(b.abbreviation));
        teams
    }
}
