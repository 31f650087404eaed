//! NFL analytics data layer and CLI
//!
//! Loads five season-long CSV datasets (defensive rankings, target depth,
//! game script, weekly player stats and rosters) into an immutable
//! [`DatasetStore`], answers cross-dataset questions through
//! [`AnalyticsQueryService`], and fetches live injuries, depth charts,
//! rosters and transactions from ESPN's public endpoints.
//!
//! Missing datasets and failed live requests are reported as values rather
//! than aborting: a partially populated data directory still serves every
//! query whose inputs are present.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nfl_analytics::{config::DataSources, AnalyticsQueryService, DatasetStore, Position};
//!
//! # fn example() -> nfl_analytics::Result<()> {
//! let store = DatasetStore::load(&DataSources::resolve(None))?;
//! let service = AnalyticsQueryService::new(&store);
//!
//! for leader in service.deep_target_leaders(20, Some(&[Position::WR]), 10)? {
//!     println!("{} {:.1}%", leader.player_name, leader.deep_target_percentage);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at your data directory once instead of passing `--data-dir`:
//! ```bash
//! export NFL_DATA_DIR=/path/to/nfl_data
//! ```

pub mod analytics;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod espn;
pub mod storage;
pub mod teams;

// Re-export commonly used types
pub use analytics::AnalyticsQueryService;
pub use cli::types::{Position, Season, TeamId};
pub use error::{AnalyticsError, Result};
pub use storage::DatasetStore;
pub use teams::{TeamRecord, TeamRegistry};
