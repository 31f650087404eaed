//! Offensive skill positions used by the target-depth filters.

use crate::error::AnalyticsError;
use std::fmt;
use std::str::FromStr;

/// Positions that appear in the target-depth and weekly stat tables.
///
/// `FLEX` is a filter convenience covering RB, WR and TE.
///
/// # Examples
///
/// ```rust
/// use nfl_analytics::Position;
///
/// assert!(Position::WR.matches("WR"));
/// assert!(Position::FLEX.matches("TE"));
/// assert!(!Position::FLEX.matches("QB"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    FB,
    FLEX,
}

impl Position {
    /// Position codes, as stored in the tables, that this position covers.
    pub fn codes(&self) -> &'static [&'static str] {
        match self {
            Position::QB => &["QB"],
            Position::RB => &["RB"],
            Position::WR => &["WR"],
            Position::TE => &["TE"],
            Position::FB => &["FB"],
            Position::FLEX => &["RB", "WR", "TE"],
        }
    }

    /// Whether a table's position code falls under this position.
    pub fn matches(&self, code: &str) -> bool {
        let code = code.trim();
        self.codes().iter().any(|c| c.eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::FB => "FB",
            Position::FLEX => "FLEX",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" | "HB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "FB" => Ok(Position::FB),
            "FLEX" => Ok(Position::FLEX),
            _ => Err(AnalyticsError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
