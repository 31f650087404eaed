//! Unit tests for ESPN response shape validation

use super::*;
use serde_json::json;

fn depth_chart_body() -> Value {
    json!({
        "count": 2,
        "items": [
            {
                "id": "1",
                "name": "3WR 1TE",
                "positions": {
                    "wr": {
                        "position": { "name": "Wide Receiver", "abbreviation": "WR" },
                        "athletes": [
                            { "slot": 0, "rank": 2, "athlete": { "$ref": "http://espn/athletes/2" } },
                            { "slot": 0, "rank": 1, "athlete": { "$ref": "http://espn/athletes/1" } },
                            { "slot": 0, "rank": 3, "athlete": { "$ref": "http://espn/athletes/3" } },
                            { "slot": 0, "rank": 4, "athlete": { "$ref": "http://espn/athletes/4" } }
                        ]
                    },
                    "qb": {
                        "athletes": [
                            { "rank": 1, "athlete": { "$ref": "http://espn/athletes/10" } }
                        ]
                    }
                }
            },
            {
                "positions": {}
            }
        ]
    })
}

#[test]
fn test_ref_collection_validates() {
    let body = json!({
        "count": 3,
        "pageIndex": 1,
        "items": [
            { "$ref": "http://espn/injuries/1" },
            { "$ref": "http://espn/injuries/2" },
            { "$ref": "http://espn/injuries/3" }
        ]
    });

    let injuries = RefCollection::validate(body).unwrap();
    assert_eq!(injuries.count, 3);
    assert_eq!(injuries.first(2).len(), 2);
    assert_eq!(injuries.first(10).len(), 3);
    assert_eq!(injuries.items[0].reference, "http://espn/injuries/1");
}

#[test]
fn test_ref_collection_rejects_missing_items() {
    assert!(RefCollection::validate(json!({ "count": 3 })).is_err());
    assert!(RefCollection::validate(json!({ "count": 1, "items": [{ "id": 1 }] })).is_err());
    assert!(RefCollection::validate(json!([1, 2, 3])).is_err());
}

#[test]
fn test_depth_chart_sorts_athletes_by_rank() {
    let chart = DepthChart::validate(depth_chart_body()).unwrap();

    assert_eq!(chart.count, 2);
    let wr = &chart.items[0].positions["wr"];
    let ranks: Vec<u32> = wr.athletes.iter().map(|a| a.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert_eq!(chart.items[1].display_name(), "Unknown");
}

#[test]
fn test_depth_chart_excerpt() {
    let chart = DepthChart::validate(depth_chart_body()).unwrap();
    let excerpt = chart.excerpt(9, 3);

    assert_eq!(excerpt.len(), 2);
    assert_eq!(excerpt[0].name, "3WR 1TE");
    // BTreeMap order: qb before wr
    assert_eq!(excerpt[0].slots[0].name, "QB");
    assert_eq!(excerpt[0].slots[1].name, "Wide Receiver");
    assert_eq!(excerpt[0].slots[1].athletes.len(), 3);
    assert!(excerpt[1].slots.is_empty());

    let one_slot = chart.excerpt(1, 3);
    assert_eq!(one_slot[0].slots.len(), 1);
}

#[test]
fn test_depth_chart_rejects_bad_athlete() {
    let body = json!({
        "count": 1,
        "items": [
            { "positions": { "qb": { "athletes": [ { "rank": "first" } ] } } }
        ]
    });
    assert!(DepthChart::validate(body).is_err());
}

#[test]
fn test_live_roster_grouped_and_flat() {
    let grouped = json!({
        "athletes": [
            {
                "position": "offense",
                "items": [
                    { "id": "3139477", "displayName": "Patrick Mahomes", "jersey": "15",
                      "position": { "abbreviation": "QB" } },
                    { "id": 15847, "displayName": "Travis Kelce" }
                ]
            }
        ]
    });
    let roster = LiveRoster::validate(grouped).unwrap();
    assert_eq!(roster.athletes.len(), 2);
    assert_eq!(roster.athletes[0].position, "QB");
    assert_eq!(roster.athletes[1].id, "15847");
    assert_eq!(roster.athletes[1].position, "N/A");

    let flat = json!({
        "athletes": [ { "id": "1", "displayName": "Josh Allen" } ]
    });
    let roster = LiveRoster::validate(flat).unwrap();
    assert_eq!(roster.athletes[0].name, "Josh Allen");
}

#[test]
fn test_team_index_flattens() {
    let body = json!({
        "sports": [{
            "leagues": [{
                "teams": [
                    { "team": { "id": "22", "abbreviation": "ARI", "displayName": "Arizona Cardinals" } },
                    { "team": { "id": 1, "abbreviation": "ATL", "displayName": "Atlanta Falcons" } }
                ]
            }]
        }]
    });

    let index = TeamIndex::validate(body).unwrap();
    assert_eq!(index.teams.len(), 2);
    assert_eq!(index.teams[1].id, "1");
    assert!(TeamIndex::validate(json!({ "sports": {} })).is_err());
}
