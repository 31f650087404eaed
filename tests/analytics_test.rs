//! Integration tests for queries over datasets loaded from disk

mod common;

use common::write_fixtures;
use nfl_analytics::{
    analytics::PaceTier,
    storage::{DatasetKind, DatasetStore},
    AnalyticsError, AnalyticsQueryService, Position,
};

fn load(skip: &[DatasetKind]) -> (tempfile::TempDir, DatasetStore) {
    let dir = tempfile::tempdir().unwrap();
    let sources = write_fixtures(dir.path(), skip);
    let store = DatasetStore::load(&sources).unwrap();
    (dir, store)
}

#[test]
fn test_top_defenses_keep_file_order() {
    let (_dir, store) = load(&[]);
    let service = AnalyticsQueryService::new(&store);

    let top: Vec<&str> = service
        .top_defenses(5)
        .unwrap()
        .iter()
        .map(|d| d.defense.team.as_str())
        .collect();
    assert_eq!(top, ["DEN", "PHI", "LAC", "MIN", "KC"]);
    assert_eq!(service.defensive_rank("KC").unwrap(), 5);
}

#[test]
fn test_deep_leaders_filtered_to_wide_receivers() {
    let (_dir, store) = load(&[]);
    let service = AnalyticsQueryService::new(&store);

    let leaders = service
        .deep_target_leaders(20, Some(&[Position::WR]), 10)
        .unwrap();
    let names: Vec<&str> = leaders.iter().map(|r| r.player_name.as_str()).collect();
    assert_eq!(names, ["P1"]);
}

#[test]
fn test_pace_ranking_and_tiers() {
    let (_dir, store) = load(&[]);
    let service = AnalyticsQueryService::new(&store);

    let fastest = service.fastest_teams(3).unwrap();
    let teams: Vec<&str> = fastest.iter().map(|e| e.record.recent_team.as_str()).collect();
    assert_eq!(teams, ["TeamA", "TeamC", "TeamB"]);
    assert_eq!(fastest[0].tier, PaceTier::High);
    assert_eq!(fastest[1].tier, PaceTier::Low);

    let slowest = service.slowest_teams(1).unwrap();
    assert_eq!(slowest[0].record.recent_team, "TeamB");
}

#[test]
fn test_player_profile_from_disk() {
    let (_dir, store) = load(&[]);
    let service = AnalyticsQueryService::new(&store);

    let p3 = service.player_target_profile("P3").unwrap();
    assert_eq!(p3.recent_team, "BUF");
    assert_eq!(p3.total_targets, 30);

    let err = service.player_target_profile("Nobody").unwrap_err();
    assert!(matches!(err, AnalyticsError::PlayerNotFound { .. }));
}

#[test]
fn test_missing_dataset_surfaces_as_unavailable() {
    let (_dir, store) = load(&[DatasetKind::GameScript]);
    let service = AnalyticsQueryService::new(&store);

    let err = service.pace_ranking(false).unwrap_err();
    assert!(matches!(err, AnalyticsError::DatasetUnavailable { .. }));
    assert!(!err.is_record_not_found());

    // Unrelated queries still answer.
    assert_eq!(service.top_target_volume(1).unwrap()[0].player_name, "P3");

    let view = service.team_composite_view("KC");
    assert!(view.pace.is_none());
    assert_eq!(view.targets.len(), 2);
    assert_eq!(view.weekly_stats.len(), 2);
}
