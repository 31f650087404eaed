//! Data source locations and ESPN endpoint configuration.
//!
//! Paths and hosts come from (in order) explicit CLI arguments, environment
//! variables, then the defaults below.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{cli::types::Season, storage::DatasetKind};

pub const DATA_DIR_ENV_VAR: &str = "NFL_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "nfl_data";

pub const ESPN_CORE_URL_ENV_VAR: &str = "NFL_ESPN_CORE_URL";
pub const ESPN_SITE_URL_ENV_VAR: &str = "NFL_ESPN_SITE_URL";
pub const DEPTH_CHART_SEASON_ENV_VAR: &str = "NFL_DEPTH_CHART_SEASON";

/// ESPN "core" API host serving injuries, depth charts and transactions.
pub const ESPN_CORE_BASE_URL: &str = "https://sports.core.api.espn.com/v2/sports/football/leagues/nfl";
/// ESPN "site" API host serving rosters and the team list.
pub const ESPN_SITE_BASE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Mapping from dataset to the file it is read from.
///
/// A dataset without an entry is treated the same as a missing file.
#[derive(Debug, Clone, Default)]
pub struct DataSources {
    paths: BTreeMap<DatasetKind, PathBuf>,
}

impl DataSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard file layout under a data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut sources = Self::new();
        for kind in DatasetKind::ALL {
            sources.insert(kind, dir.join(kind.default_file_name()));
        }
        sources
    }

    /// Resolve the data directory from an explicit override, `NFL_DATA_DIR`,
    /// or `./nfl_data`.
    pub fn resolve(data_dir: Option<PathBuf>) -> Self {
        let dir = data_dir
            .or_else(|| std::env::var_os(DATA_DIR_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self::in_dir(dir)
    }

    pub fn insert(&mut self, kind: DatasetKind, path: impl Into<PathBuf>) -> &mut Self {
        self.paths.insert(kind, path.into());
        self
    }

    pub fn with(mut self, kind: DatasetKind, path: impl Into<PathBuf>) -> Self {
        self.insert(kind, path);
        self
    }

    pub fn path(&self, kind: DatasetKind) -> Option<&Path> {
        self.paths.get(&kind).map(PathBuf::as_path)
    }
}

/// Hosts and request settings for the ESPN client.
#[derive(Debug, Clone)]
pub struct EspnConfig {
    pub core_base_url: String,
    pub site_base_url: String,
    pub depth_chart_season: Season,
    pub timeout: Duration,
}

impl Default for EspnConfig {
    fn default() -> Self {
        Self {
            core_base_url: ESPN_CORE_BASE_URL.to_string(),
            site_base_url: ESPN_SITE_BASE_URL.to_string(),
            depth_chart_season: Season::default(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl EspnConfig {
    /// Defaults with env overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(ESPN_CORE_URL_ENV_VAR) {
            config.core_base_url = url;
        }
        if let Ok(url) = std::env::var(ESPN_SITE_URL_ENV_VAR) {
            config.site_base_url = url;
        }
        if let Some(season) = std::env::var(DEPTH_CHART_SEASON_ENV_VAR)
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.depth_chart_season = season;
        }
        config
    }

    /// Point both hosts at one base URL (mock servers, proxies).
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            core_base_url: format!("{base}/core"),
            site_base_url: format!("{base}/site"),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_covers_every_dataset() {
        let sources = DataSources::in_dir("/tmp/nfl");
        for kind in DatasetKind::ALL {
            let path = sources.path(kind).unwrap();
            assert!(path.starts_with("/tmp/nfl"));
        }
        assert_eq!(
            sources.path(DatasetKind::WeeklyStats).unwrap(),
            Path::new("/tmp/nfl/player_stats/2024_weekly_stats.csv")
        );
    }

    #[test]
    fn test_explicit_dir_wins() {
        let sources = DataSources::resolve(Some(PathBuf::from("/data/override")));
        assert!(sources
            .path(DatasetKind::Rosters)
            .unwrap()
            .starts_with("/data/override"));
    }

    #[test]
    fn test_with_base_url_splits_hosts() {
        let config = EspnConfig::with_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.core_base_url, "http://127.0.0.1:9000/core");
        assert_eq!(config.site_base_url, "http://127.0.0.1:9000/site");
        assert_eq!(config.timeout, DEFAULT_REQUEST_TIMEOUT);
    }
}
