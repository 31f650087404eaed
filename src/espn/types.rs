//! Response shapes for the ESPN endpoints.
//!
//! Every body is checked against its expected shape before it reaches the
//! query layer; a body that does not fit becomes
//! [`UnavailableReason::UnexpectedShape`](super::UnavailableReason) instead
//! of a structural failure further down.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// ESPN ids arrive as either strings or numbers.
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// A body shape that can be validated from raw JSON.
pub trait ApiShape: DeserializeOwned + Sized {
    fn validate(value: Value) -> Result<Self, serde_json::Error> {
        let mut parsed: Self = serde_json::from_value(value)?;
        parsed.normalize();
        Ok(parsed)
    }

    /// Post-parse cleanup such as ordering.
    fn normalize(&mut self) {}
}

/// Opaque link to another ESPN resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiRef {
    #[serde(rename = "$ref")]
    pub reference: String,
}

/// `{count, items: [{$ref}]}` listing, used by injuries and transactions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RefCollection {
    pub count: u32,
    pub items: Vec<ApiRef>,
}

impl ApiShape for RefCollection {}

impl RefCollection {
    /// First `n` references.
    pub fn first(&self, n: usize) -> &[ApiRef] {
        &self.items[..self.items.len().min(n)]
    }
}

/// One athlete reference at a depth-chart slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RankedAthlete {
    pub rank: u32,
    pub athlete: ApiRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct SlotPosition {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PositionSlot {
    #[serde(default)]
    pub position: Option<SlotPosition>,
    #[serde(default)]
    pub athletes: Vec<RankedAthlete>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Formation {
    #[serde(default)]
    pub name: Option<String>,
    /// Slots keyed by ESPN's slot key (`qb`, `wr1`, ...).
    pub positions: BTreeMap<String, PositionSlot>,
}

impl Formation {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// Depth chart: formations, each with ranked athlete references per slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DepthChart {
    pub count: u32,
    pub items: Vec<Formation>,
}

impl ApiShape for DepthChart {
    fn normalize(&mut self) {
        for formation in &mut self.items {
            for slot in formation.positions.values_mut() {
                slot.athletes.sort_by_key(|a| a.rank);
            }
        }
    }
}

/// A trimmed slot for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotExcerpt {
    pub key: String,
    pub name: String,
    pub athletes: Vec<RankedAthlete>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormationExcerpt {
    pub name: String,
    pub slots: Vec<SlotExcerpt>,
}

impl DepthChart {
    /// Keep the first `max_slots` slots per formation and the top
    /// `max_athletes` at each.
    pub fn excerpt(&self, max_slots: usize, max_athletes: usize) -> Vec<FormationExcerpt> {
        self.items
            .iter()
            .map(|formation| FormationExcerpt {
                name: formation.display_name().to_string(),
                slots: formation
                    .positions
                    .iter()
                    .take(max_slots)
                    .map(|(key, slot)| SlotExcerpt {
                        key: key.clone(),
                        name: slot
                            .position
                            .as_ref()
                            .and_then(|p| p.name.clone())
                            .unwrap_or_else(|| key.to_uppercase()),
                        athletes: slot.athletes.iter().take(max_athletes).cloned().collect(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RosterPosition {
    #[serde(default)]
    abbreviation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RosterAthlete {
    #[serde(deserialize_with = "de_id")]
    id: String,
    #[serde(rename = "displayName")]
    display_name: String,
    #[serde(default)]
    position: Option<RosterPosition>,
    #[serde(default)]
    jersey: Option<String>,
}

/// The site API groups athletes by unit; older payloads list them flat.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RosterItem {
    Group { items: Vec<RosterAthlete> },
    Athlete(RosterAthlete),
}

/// One player on a live ESPN roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveRosterEntry {
    pub id: String,
    pub name: String,
    pub position: String,
    pub jersey: Option<String>,
}

impl From<RosterAthlete> for LiveRosterEntry {
    fn from(a: RosterAthlete) -> Self {
        Self {
            id: a.id,
            name: a.display_name,
            position: a
                .position
                .and_then(|p| p.abbreviation)
                .unwrap_or_else(|| "N/A".to_string()),
            jersey: a.jersey,
        }
    }
}

/// Roster body, flattened to a single athlete list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "RawRoster")]
pub struct LiveRoster {
    pub athletes: Vec<LiveRosterEntry>,
}

#[derive(Deserialize)]
struct RawRoster {
    athletes: Vec<RosterItem>,
}

impl From<RawRoster> for LiveRoster {
    fn from(raw: RawRoster) -> Self {
        let athletes = raw
            .athletes
            .into_iter()
            .flat_map(|item| match item {
                RosterItem::Group { items } => items,
                RosterItem::Athlete(a) => vec![a],
            })
            .map(LiveRosterEntry::from)
            .collect();
        Self { athletes }
    }
}

impl ApiShape for LiveRoster {}

/// A franchise as listed by the site API's team index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EspnTeam {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub abbreviation: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Deserialize)]
struct TeamWrapper {
    team: EspnTeam,
}

#[derive(Deserialize)]
struct TeamLeague {
    teams: Vec<TeamWrapper>,
}

#[derive(Deserialize)]
struct TeamSport {
    leagues: Vec<TeamLeague>,
}

#[derive(Deserialize)]
struct RawTeamIndex {
    sports: Vec<TeamSport>,
}

/// `sports[].leagues[].teams[].team`, flattened.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "RawTeamIndex")]
pub struct TeamIndex {
    pub teams: Vec<EspnTeam>,
}

impl From<RawTeamIndex> for TeamIndex {
    fn from(raw: RawTeamIndex) -> Self {
        let teams = raw
            .sports
            .into_iter()
            .flat_map(|s| s.leagues)
            .flat_map(|l| l.teams)
            .map(|w| w.team)
            .collect();
        Self { teams }
    }
}

impl ApiShape for TeamIndex {}
