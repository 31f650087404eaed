//! Error types for the NFL analytics core

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Dataset not available: {dataset}")]
    DatasetUnavailable { dataset: String },

    #[error("Dataset {dataset} at {path} is corrupt: {reason}")]
    DatasetCorrupt {
        dataset: String,
        path: String,
        reason: String,
    },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Team not found: {team}")]
    TeamNotFound { team: String },

    #[error("Unknown team abbreviation: {abbreviation}")]
    UnknownTeam { abbreviation: String },

    #[error("Unknown ESPN capability: {capability}")]
    UnknownCapability { capability: String },

    #[error("ESPN capability {capability} requires a team id")]
    MissingTeamId { capability: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Unknown dataset: {name}")]
    UnknownDataset { name: String },
}

impl AnalyticsError {
    /// Dataset loaded, but the requested key has no row.
    pub fn is_record_not_found(&self) -> bool {
        matches!(
            self,
            AnalyticsError::PlayerNotFound { .. } | AnalyticsError::TeamNotFound { .. }
        )
    }

    /// Invalid input to the core's own API rather than a data condition.
    pub fn is_caller_bug(&self) -> bool {
        matches!(
            self,
            AnalyticsError::UnknownTeam { .. }
                | AnalyticsError::UnknownCapability { .. }
                | AnalyticsError::MissingTeamId { .. }
                | AnalyticsError::UnknownDataset { .. }
        )
    }
}
