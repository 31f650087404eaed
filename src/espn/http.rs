//! HTTP client for ESPN's public NFL endpoints.
//!
//! Each capability maps to a fixed URL template. Requests are single GETs
//! with a hard timeout; no retries and no caching. Network failures,
//! non-200 statuses and malformed bodies come back as
//! [`FetchOutcome::Unavailable`] rather than errors. Only invalid input
//! (unknown capability, missing team id) is an `Err`.

use std::{collections::BTreeMap, fmt, str::FromStr};

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::types::{ApiShape, DepthChart, LiveRoster, RefCollection, TeamIndex};
use crate::{cli::types::TeamId, config::EspnConfig, error::AnalyticsError, Result};

#[cfg(test)]
mod tests;

pub const TEAM_ID_PLACEHOLDER: &str = "{team_id}";

/// Live data the ESPN client can fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Injuries,
    Roster,
    DepthChart,
    Transactions,
    Teams,
}

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::Injuries,
        Capability::Roster,
        Capability::DepthChart,
        Capability::Transactions,
        Capability::Teams,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Capability::Injuries => "injuries",
            Capability::Roster => "roster",
            Capability::DepthChart => "depth_chart",
            Capability::Transactions => "transactions",
            Capability::Teams => "teams",
        }
    }

    pub fn requires_team(&self) -> bool {
        !matches!(self, Capability::Transactions | Capability::Teams)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Capability {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self> {
        Capability::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| AnalyticsError::UnknownCapability {
                capability: s.to_string(),
            })
    }
}

/// Fixed capability → URL template mapping.
#[derive(Debug, Clone)]
pub struct EndpointCatalogue {
    templates: BTreeMap<Capability, String>,
}

impl EndpointCatalogue {
    pub fn from_config(config: &EspnConfig) -> Self {
        let core = config.core_base_url.trim_end_matches('/');
        let site = config.site_base_url.trim_end_matches('/');
        let season = config.depth_chart_season;

        let templates = BTreeMap::from([
            (
                Capability::Injuries,
                format!("{core}/teams/{TEAM_ID_PLACEHOLDER}/injuries"),
            ),
            (
                Capability::Roster,
                format!("{site}/teams/{TEAM_ID_PLACEHOLDER}/roster"),
            ),
            (
                Capability::DepthChart,
                format!("{core}/seasons/{season}/teams/{TEAM_ID_PLACEHOLDER}/depthcharts"),
            ),
            (Capability::Transactions, format!("{core}/transactions")),
            (Capability::Teams, format!("{site}/teams")),
        ]);
        Self { templates }
    }

    pub fn template(&self, capability: Capability) -> &str {
        // Every capability is inserted in `from_config`.
        self.templates
            .get(&capability)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Concrete URL for a capability, substituting the team id.
    ///
    /// Templates without a placeholder ignore `team_id`.
    pub fn url_for(&self, capability: Capability, team_id: Option<TeamId>) -> Result<String> {
        let template = self.template(capability);
        if !template.contains(TEAM_ID_PLACEHOLDER) {
            return Ok(template.to_string());
        }
        let team_id = team_id.ok_or_else(|| AnalyticsError::MissingTeamId {
            capability: capability.name().to_string(),
        })?;
        Ok(template.replace(TEAM_ID_PLACEHOLDER, &team_id.to_string()))
    }
}

impl Default for EndpointCatalogue {
    fn default() -> Self {
        Self::from_config(&EspnConfig::default())
    }
}

/// Why a live fetch produced no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum UnavailableReason {
    Status(u16),
    Timeout,
    Connect,
    Transport(String),
    MalformedBody,
    UnexpectedShape(String),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::Status(code) => write!(f, "HTTP status {code}"),
            UnavailableReason::Timeout => write!(f, "request timed out"),
            UnavailableReason::Connect => write!(f, "connection failed"),
            UnavailableReason::Transport(msg) => write!(f, "transport error: {msg}"),
            UnavailableReason::MalformedBody => write!(f, "response body is not valid JSON"),
            UnavailableReason::UnexpectedShape(msg) => write!(f, "unexpected response shape: {msg}"),
        }
    }
}

impl From<&reqwest::Error> for UnavailableReason {
    fn from(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            UnavailableReason::Timeout
        } else if e.is_connect() {
            UnavailableReason::Connect
        } else if e.is_decode() {
            UnavailableReason::MalformedBody
        } else {
            UnavailableReason::Transport(e.to_string())
        }
    }
}

/// Result of a live fetch: data, or an expected "no data" signal.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Available(T),
    Unavailable(UnavailableReason),
}

impl<T> FetchOutcome<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, FetchOutcome::Available(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            FetchOutcome::Available(v) => Some(v),
            FetchOutcome::Unavailable(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Available(v) => FetchOutcome::Available(f(v)),
            FetchOutcome::Unavailable(r) => FetchOutcome::Unavailable(r),
        }
    }
}

/// Validate a raw body against the shape its capability promises.
fn check_shape(capability: Capability, body: &Value) -> std::result::Result<(), serde_json::Error> {
    match capability {
        Capability::Injuries | Capability::Transactions => {
            RefCollection::deserialize(body).map(drop)
        }
        Capability::Roster => LiveRoster::deserialize(body).map(drop),
        Capability::DepthChart => DepthChart::deserialize(body).map(drop),
        Capability::Teams => TeamIndex::deserialize(body).map(drop),
    }
}

fn unexpected_shape<T>(capability: Capability, e: serde_json::Error) -> FetchOutcome<T> {
    warn!(%capability, error = %e, "ESPN response has unexpected shape");
    FetchOutcome::Unavailable(UnavailableReason::UnexpectedShape(e.to_string()))
}

/// Async client over the endpoint catalogue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: Client,
    catalogue: EndpointCatalogue,
}

impl EspnClient {
    pub fn new(config: &EspnConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(concat!("nfl-analytics/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            catalogue: EndpointCatalogue::from_config(config),
        })
    }

    /// Fetch by capability name, as a presentation layer would pass it.
    pub async fn fetch_by_name(
        &self,
        capability: &str,
        team_id: Option<TeamId>,
    ) -> Result<FetchOutcome<Value>> {
        let capability: Capability = capability.parse()?;
        self.fetch(capability, team_id).await
    }

    /// One GET against the capability's endpoint, parsed as JSON and
    /// checked against that capability's response shape.
    pub async fn fetch(
        &self,
        capability: Capability,
        team_id: Option<TeamId>,
    ) -> Result<FetchOutcome<Value>> {
        let outcome = self.fetch_json(capability, team_id).await?;
        Ok(match outcome {
            FetchOutcome::Available(body) => match check_shape(capability, &body) {
                Ok(()) => FetchOutcome::Available(body),
                Err(e) => unexpected_shape(capability, e),
            },
            unavailable => unavailable,
        })
    }

    async fn fetch_json(
        &self,
        capability: Capability,
        team_id: Option<TeamId>,
    ) -> Result<FetchOutcome<Value>> {
        let url = self.catalogue.url_for(capability, team_id)?;
        debug!(%capability, %url, "fetching from ESPN");

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                let reason = UnavailableReason::from(&e);
                warn!(%capability, %url, %reason, "ESPN request failed");
                return Ok(FetchOutcome::Unavailable(reason));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%capability, %url, status = status.as_u16(), "ESPN returned non-200 status");
            return Ok(FetchOutcome::Unavailable(UnavailableReason::Status(
                status.as_u16(),
            )));
        }

        match response.json::<Value>().await {
            Ok(body) => Ok(FetchOutcome::Available(body)),
            Err(e) => {
                let reason = if e.is_timeout() {
                    UnavailableReason::Timeout
                } else {
                    UnavailableReason::MalformedBody
                };
                warn!(%capability, %url, %reason, "ESPN response unreadable");
                Ok(FetchOutcome::Unavailable(reason))
            }
        }
    }

    async fn fetch_shape<T: ApiShape>(
        &self,
        capability: Capability,
        team_id: Option<TeamId>,
    ) -> Result<FetchOutcome<T>> {
        let outcome = self.fetch_json(capability, team_id).await?;
        Ok(match outcome {
            FetchOutcome::Available(body) => match T::validate(body) {
                Ok(parsed) => FetchOutcome::Available(parsed),
                Err(e) => unexpected_shape(capability, e),
            },
            FetchOutcome::Unavailable(reason) => FetchOutcome::Unavailable(reason),
        })
    }

    pub async fn injuries(&self, team_id: TeamId) -> Result<FetchOutcome<RefCollection>> {
        self.fetch_shape(Capability::Injuries, Some(team_id)).await
    }

    pub async fn depth_chart(&self, team_id: TeamId) -> Result<FetchOutcome<DepthChart>> {
        self.fetch_shape(Capability::DepthChart, Some(team_id)).await
    }

    pub async fn roster(&self, team_id: TeamId) -> Result<FetchOutcome<LiveRoster>> {
        self.fetch_shape(Capability::Roster, Some(team_id)).await
    }

    pub async fn transactions(&self) -> Result<FetchOutcome<RefCollection>> {
        self.fetch_shape(Capability::Transactions, None).await
    }

    pub async fn teams(&self) -> Result<FetchOutcome<TeamIndex>> {
        self.fetch_shape(Capability::Teams, None).await
    }
}
