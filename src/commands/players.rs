//! Player target-depth commands

use crate::{
    analytics::AnalyticsQueryService,
    cli::{types::Position, TargetBoard},
    storage::{DatasetKind, DatasetStore, TargetDepthRecord},
    Result,
};

use super::common::{print_json, report_query_error};

/// Handle the player command
pub fn handle_player(
    store: &DatasetStore,
    name: Option<&str>,
    team: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let service = AnalyticsQueryService::new(store);

    let Some(name) = name else {
        if let Err(e) = store.require(DatasetKind::TargetDepth) {
            return report_query_error(e, as_json);
        }
        let names = store.player_names();
        if as_json {
            return print_json(&names);
        }
        for n in names {
            println!("{n}");
        }
        return Ok(());
    };

    let profile = match team {
        Some(team) => service.player_target_profile_on_team(name, team),
        None => service.player_target_profile(name),
    };
    let profile = match profile {
        Ok(p) => p,
        Err(e) => return report_query_error(e, as_json),
    };

    if as_json {
        return print_json(profile);
    }

    print_profile(profile);

    if team.is_none() {
        let teams = service.teams_for_player(name)?;
        if teams.len() > 1 {
            println!();
            println!(
                "⚠ {name} appears on {} teams ({}); showing {}. Use --team to choose.",
                teams.len(),
                teams.join(", "),
                profile.recent_team
            );
        }
    }
    Ok(())
}

fn print_profile(p: &TargetDepthRecord) {
    println!("{} ({}, {})", p.player_name, p.recent_team, p.position);
    println!(
        "  Total targets: {}  Receptions: {}  Receiving yards: {:.0}",
        p.total_targets, p.total_receptions, p.total_receiving_yards
    );
    println!(
        "  Short (0-9): {:.1}%  Medium (10-19): {:.1}%  Deep (20+): {:.1}%",
        p.short_target_percentage, p.medium_target_percentage, p.deep_target_percentage
    );
    println!(
        "  Avg air yards: {:.1}  YAC per rec: {:.1}  Target share: {:.1}%",
        p.avg_air_yards, p.avg_yac, p.target_share
    );
}

/// Handle the targets command
pub fn handle_targets(
    store: &DatasetStore,
    board: TargetBoard,
    min_targets: u32,
    positions: Option<&[Position]>,
    limit: usize,
    as_json: bool,
) -> Result<()> {
    let service = AnalyticsQueryService::new(store);

    let rows = match board {
        TargetBoard::Deep => service.deep_target_leaders(min_targets, positions, limit),
        TargetBoard::Volume => service.volume_leaders(min_targets, positions, limit),
        TargetBoard::Targets => service.top_target_volume(limit),
    };
    let rows = match rows {
        Ok(rows) => rows,
        Err(e) => return report_query_error(e, as_json),
    };

    if as_json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No players with at least {min_targets} targets");
        return Ok(());
    }

    for (i, r) in rows.iter().enumerate() {
        match board {
            TargetBoard::Deep => println!(
                "{:>2}. {:<24} {:<4} deep {:>5.1}%  targets {}",
                i + 1,
                r.player_name,
                r.recent_team,
                r.deep_target_percentage,
                r.total_targets
            ),
            TargetBoard::Volume => println!(
                "{:>2}. {:<24} {:<4} targets {:>4}  air yds {:.1}",
                i + 1,
                r.player_name,
                r.recent_team,
                r.total_targets,
                r.avg_air_yards
            ),
            TargetBoard::Targets => println!(
                "{:>2}. {:<24} {:<4} {:<3} targets {}",
                i + 1,
                r.player_name,
                r.recent_team,
                r.position,
                r.targets
            ),
        }
    }
    Ok(())
}
