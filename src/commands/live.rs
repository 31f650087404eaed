//! Live ESPN commands
//!
//! Unavailable responses are reported as a notice; only caller errors such
//! as an unknown team abbreviation propagate.

use serde::Serialize;

use crate::{
    espn::{types::ApiRef, EspnClient},
    teams::TeamRegistry,
    Result,
};

use super::common::{or_dash, render_outcome};

/// Leading slice of a `$ref` listing
#[derive(Debug, Serialize)]
struct RefListing {
    count: u32,
    items: Vec<ApiRef>,
}

/// Handle the injuries command
pub async fn handle_injuries(
    client: &EspnClient,
    team: &str,
    limit: usize,
    as_json: bool,
) -> Result<()> {
    let team_id = TeamRegistry::resolve(team)?;
    let outcome = client.injuries(team_id).await?.map(|c| RefListing {
        count: c.count,
        items: c.first(limit).to_vec(),
    });

    render_outcome("injury data", outcome, as_json, |listing| {
        if listing.items.is_empty() {
            println!("No current injuries reported for {}", team.to_uppercase());
            return;
        }
        println!(
            "{} injury reports for {} (showing {})",
            listing.count,
            team.to_uppercase(),
            listing.items.len()
        );
        for r in &listing.items {
            println!("  {}", r.reference);
        }
    })
}

/// Handle the depth-chart command
pub async fn handle_depth_chart(
    client: &EspnClient,
    team: &str,
    slots: usize,
    athletes: usize,
    as_json: bool,
) -> Result<()> {
    let team_id = TeamRegistry::resolve(team)?;
    let outcome = client
        .depth_chart(team_id)
        .await?
        .map(|chart| chart.excerpt(slots, athletes));

    render_outcome("depth chart", outcome, as_json, |formations| {
        if formations.is_empty() {
            println!("No depth chart published for {}", team.to_uppercase());
            return;
        }
        for formation in formations {
            println!("{}", formation.name);
            for slot in &formation.slots {
                println!("  {}", slot.name);
                for a in &slot.athletes {
                    println!("    {}. {}", a.rank, a.athlete.reference);
                }
            }
        }
    })
}

/// Handle the roster command
pub async fn handle_roster(client: &EspnClient, team: &str, as_json: bool) -> Result<()> {
    let team_id = TeamRegistry::resolve(team)?;
    let outcome = client.roster(team_id).await?;

    render_outcome("roster", outcome, as_json, |roster| {
        println!("{} players", roster.athletes.len());
        for a in &roster.athletes {
            println!(
                "  {:>3} {:<4} {}",
                or_dash(a.jersey.as_deref()),
                a.position,
                a.name
            );
        }
    })
}

/// Handle the transactions command
pub async fn handle_transactions(client: &EspnClient, limit: usize, as_json: bool) -> Result<()> {
    let outcome = client.transactions().await?.map(|c| RefListing {
        count: c.count,
        items: c.first(limit).to_vec(),
    });

    render_outcome("transactions", outcome, as_json, |listing| {
        println!("{} transactions (showing {})", listing.count, listing.items.len());
        for r in &listing.items {
            println!("  {}", r.reference);
        }
    })
}

/// Handle the espn-teams command
pub async fn handle_espn_teams(client: &EspnClient, as_json: bool) -> Result<()> {
    let outcome = client.teams().await?;

    render_outcome("team index", outcome, as_json, |index| {
        for t in &index.teams {
            println!("{:<4} {:>3}  {}", t.abbreviation, t.id, t.display_name);
        }
    })
}
