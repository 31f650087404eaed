//! Unit tests for the dataset store

use super::*;

fn defense(team: &str, yards: f64) -> DefensiveRanking {
    DefensiveRanking {
        team: team.to_string(),
        receiving_yards_allowed_per_game: yards,
        fantasy_points_allowed_per_game: 20.0,
        targets_allowed_per_game: 30.0,
        receptions_allowed_per_game: 20.0,
    }
}

fn weekly(name: &str, team: &str, week: u16) -> WeeklyPlayerStat {
    WeeklyPlayerStat {
        player_name: name.to_string(),
        recent_team: team.to_string(),
        week: Some(week),
        fields: BTreeMap::new(),
    }
}

#[test]
fn test_from_tables_marks_non_empty_tables_available() {
    let store = DatasetStore::from_tables(DatasetTables {
        defensive_rankings: vec![defense("DEN", 160.0)],
        ..Default::default()
    });

    assert!(store.is_available(DatasetKind::DefensiveRankings));
    assert!(!store.is_available(DatasetKind::TargetDepth));
    assert!(store.is_available_by_name("defensive_rankings"));
    assert!(!store.is_available_by_name("odds"));
    assert!(!store.report().all_loaded());
    assert_eq!(store.report().failures().count(), 4);
}

#[test]
fn test_require_unavailable_dataset() {
    let store = DatasetStore::default();
    let err = store.require(DatasetKind::GameScript).unwrap_err();

    match err {
        AnalyticsError::DatasetUnavailable { dataset } => assert_eq!(dataset, "game_script"),
        other => panic!("Expected DatasetUnavailable, got {other:?}"),
    }
}

#[test]
fn test_unavailable_tables_are_empty() {
    let store = DatasetStore::default();
    assert!(store.defensive_rankings().is_empty());
    assert!(store.rosters().is_empty());
    assert_eq!(store.row_count(DatasetKind::WeeklyStats), 0);
}

#[test]
fn test_summary_counts_distinct_players() {
    let store = DatasetStore::from_tables(DatasetTables {
        weekly_stats: vec![
            weekly("Puka Nacua", "LA", 1),
            weekly("Puka Nacua", "LA", 2),
            weekly("Cooper Kupp", "LA", 1),
        ],
        ..Default::default()
    });

    let summary = store.summary();
    assert_eq!(summary.players_analyzed, 2);
    assert_eq!(summary.games_analyzed, 3);
    assert_eq!(summary.teams_covered, 0);
    assert!(summary.datasets[&DatasetKind::WeeklyStats].available);
    assert!(!summary.datasets[&DatasetKind::GameScript].available);
}

#[test]
fn test_team_codes_are_distinct_and_sorted() {
    let record = |team: &str| GameScriptRecord {
        recent_team: team.to_string(),
        pace_category: PaceCategory::Medium,
        offensive_style: "Balanced".to_string(),
        plays_per_game_rank: 1,
        yards_per_play_rank: 1,
        pass_rate_rank: 1,
        total_plays: 64.0,
        yards_per_play: 5.5,
        fantasy_points: 20.0,
    };
    let store = DatasetStore::from_tables(DatasetTables {
        game_script: vec![record("SF"), record("BUF"), record("SF")],
        ..Default::default()
    });

    assert_eq!(store.team_codes(), vec!["BUF", "SF"]);
}

#[test]
fn test_get_by_name() {
    let store = DatasetStore::from_tables(DatasetTables {
        defensive_rankings: vec![defense("DEN", 160.0), defense("PHI", 165.0)],
        ..Default::default()
    });

    let table = store.get("defensive_rankings").unwrap();
    assert_eq!(table.len(), 2);
    assert!(matches!(table, Table::DefensiveRankings(rows) if rows[0].team == "DEN"));

    // Known but unloaded datasets come back empty.
    assert!(store.get("rosters").unwrap().is_empty());

    let err = store.get("odds").unwrap_err();
    assert!(matches!(err, AnalyticsError::UnknownDataset { .. }));
    assert!(err.is_caller_bug());
}
