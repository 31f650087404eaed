//! Shared CSV fixtures for integration tests

#![allow(dead_code)]

use std::{fs, path::Path};

use nfl_analytics::{config::DataSources, storage::DatasetKind};

pub const DEFENSIVE_CSV: &str = "\
team,receiving_yards_allowed_per_game,fantasy_points_allowed_per_game,targets_allowed_per_game,receptions_allowed_per_game
DEN,160.2,18.4,29.1,18.7
PHI,165.9,19.0,30.2,19.5
LAC,170.3,19.8,31.0,20.1
MIN,175.0,20.6,33.4,21.9
KC,179.4,21.0,32.8,21.2
BAL,190.1,24.3,36.1,23.8
";

pub const TARGET_DEPTH_CSV: &str = "\
player_name,recent_team,position,targets,total_targets,total_receptions,total_receiving_yards,short_target_percentage,medium_target_percentage,deep_target_percentage,avg_air_yards,avg_yac,target_share
P1,KC,WR,25,25,18,240.0,50.0,30.0,20.0,9.5,4.1,18.2
P2,KC,WR,15,15,10,110.0,60.0,30.0,10.0,7.0,3.2,9.1
P3,BUF,TE,30,30,24,260.0,70.0,25.0,5.0,5.2,5.5,21.0
";

pub const GAME_SCRIPT_CSV: &str = "\
recent_team,pace_category,offensive_style,plays_per_game_rank,yards_per_play_rank,pass_rate_rank,total_plays,yards_per_play,fantasy_points
TeamA,Fast,Pass Heavy,1,4,2,72.0,5.9,24.1
TeamB,Slow,Run Heavy,3,2,3,58.0,6.1,19.3
TeamC,Medium,Balanced,2,1,1,65.0,6.4,22.7
";

pub const WEEKLY_STATS_CSV: &str = "\
player_name,recent_team,week,targets,receptions,receiving_yards
P1,KC,1,8,6,77
P1,KC,2,9,7,81
P3,BUF,1,10,8,90
";

pub const ROSTERS_CSV: &str = "\
player_name,team,position,height,weight
P1,KC,WR,6-1,195
P3,BUF,TE,6-4,250
";

pub fn fixture_csv(kind: DatasetKind) -> &'static str {
    match kind {
        DatasetKind::DefensiveRankings => DEFENSIVE_CSV,
        DatasetKind::TargetDepth => TARGET_DEPTH_CSV,
        DatasetKind::GameScript => GAME_SCRIPT_CSV,
        DatasetKind::WeeklyStats => WEEKLY_STATS_CSV,
        DatasetKind::Rosters => ROSTERS_CSV,
    }
}

/// Write every fixture except those in `skip` into the standard layout.
pub fn write_fixtures(dir: &Path, skip: &[DatasetKind]) -> DataSources {
    let sources = DataSources::in_dir(dir);
    for kind in DatasetKind::ALL {
        if skip.contains(&kind) {
            continue;
        }
        let path = sources.path(kind).unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, fixture_csv(kind)).unwrap();
    }
    sources
}
