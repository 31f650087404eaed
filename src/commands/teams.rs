//! Defense, pace and team commands

use serde_json::json;

use crate::{
    analytics::{AnalyticsQueryService, PaceTier},
    storage::{DatasetKind, DatasetStore},
    teams::TeamRegistry,
    Result,
};

use super::common::{or_dash, print_json, report_query_error};

/// Handle the defenses command
pub fn handle_defenses(store: &DatasetStore, limit: usize, as_json: bool) -> Result<()> {
    let service = AnalyticsQueryService::new(store);
    let defenses = match service.top_defenses(limit) {
        Ok(d) => d,
        Err(e) => return report_query_error(e, as_json),
    };

    if as_json {
        return print_json(&defenses);
    }

    println!("Best pass defenses (receiving yards allowed per game)");
    for d in &defenses {
        println!(
            "{:>2}. {:<4} {:>6.1} yds  {:>5.1} FP  {:>4.1} tgt  {:>4.1} rec",
            d.rank,
            d.defense.team,
            d.defense.receiving_yards_allowed_per_game,
            d.defense.fantasy_points_allowed_per_game,
            d.defense.targets_allowed_per_game,
            d.defense.receptions_allowed_per_game,
        );
    }
    Ok(())
}

/// Handle the pace command
///
/// Lists the fastest teams, or the slowest (still fastest first) with
/// `slowest`. Numbering is the league-wide pace rank.
pub fn handle_pace(
    store: &DatasetStore,
    slowest: bool,
    limit: Option<usize>,
    as_json: bool,
) -> Result<()> {
    let service = AnalyticsQueryService::new(store);
    let limit = limit.unwrap_or(usize::MAX);
    let entries = if slowest {
        service.slowest_teams(limit)
    } else {
        service.fastest_teams(limit)
    };
    let entries = match entries {
        Ok(e) => e,
        Err(e) => return report_query_error(e, as_json),
    };

    if as_json {
        return print_json(&entries);
    }

    let first_rank = if slowest {
        store.row_count(DatasetKind::GameScript) - entries.len() + 1
    } else {
        1
    };
    for (i, e) in entries.iter().enumerate() {
        println!(
            "{:>2}. {:<4} {:>5.1} plays/g  {:>4.2} yds/play  {}",
            first_rank + i,
            e.record.recent_team,
            e.record.total_plays,
            e.record.yards_per_play,
            e.tier,
        );
    }
    Ok(())
}

/// Handle the team command
pub fn handle_team(store: &DatasetStore, team: Option<&str>, as_json: bool) -> Result<()> {
    let Some(team) = team else {
        if let Err(e) = store.require(DatasetKind::GameScript) {
            return report_query_error(e, as_json);
        }
        let codes = store.team_codes();
        if as_json {
            return print_json(&codes);
        }
        for code in codes {
            println!("{code}");
        }
        return Ok(());
    };

    let service = AnalyticsQueryService::new(store);
    let view = service.team_composite_view(team);
    let defensive_rank = service.defensive_rank(team).ok();

    if as_json {
        return print_json(&json!({ "view": view, "defensive_rank": defensive_rank }));
    }

    if view.is_empty() && defensive_rank.is_none() {
        println!("⚠ No data for team {team}");
        return Ok(());
    }

    println!("{team}");
    if let Some(pace) = view.pace {
        println!(
            "  Pace: {:.1} plays/g ({}), {:.2} yds/play, {}",
            pace.total_plays,
            PaceTier::from_plays(pace.total_plays),
            pace.yards_per_play,
            pace.offensive_style
        );
    }
    println!("  Pass defense rank: {}", or_dash(defensive_rank));
    println!("  Weekly stat rows: {}", view.weekly_stats.len());

    if !view.targets.is_empty() {
        println!("  Targets:");
        for t in &view.targets {
            println!(
                "    {:<24} {:<3} {:>4} tgt  deep {:>5.1}%",
                t.player_name, t.position, t.total_targets, t.deep_target_percentage
            );
        }
    }
    Ok(())
}

/// Handle the teams command
pub fn handle_teams(as_json: bool) -> Result<()> {
    let teams = TeamRegistry::all_teams();
    if as_json {
        return print_json(&teams);
    }
    for t in teams {
        println!("{:<4} {}", t.abbreviation, t.external_id);
    }
    Ok(())
}
