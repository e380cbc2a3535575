//! # football-data.org client
//!
//! Thin async wrapper over [reqwest] for the two read endpoints of the football-data.org v4 API:
//! matches in a date range and standings of a competition. Responses are validated into the typed
//! records in [`types`]; a body that does not fit is reported as [`FootballDataError::Malformed`].

mod error;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

pub use error::{FootballDataError, Result};
pub use types::{
    Competition, FullTime, Match, MatchesResponse, Score, StandingTable, StandingsResponse,
    TableRow, TeamRef, UNKNOWN_TEAM,
};

/// Public v4 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4";

/// Header carrying the API key.
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Masks an API key for logging: first 4 chars + `***` + last 4 chars.
/// Keys of 12 chars or fewer are fully masked.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Source of match and standings data. Implemented by [`FootballDataClient`]; handlers depend on
/// this trait so tests can substitute a mock.
#[async_trait]
pub trait FootballSource: Send + Sync {
    /// Matches whose kickoff date lies in `[date_from, date_to]`.
    async fn matches(&self, date_from: NaiveDate, date_to: NaiveDate) -> Result<Vec<Match>>;

    /// Standings for a competition code (e.g. `PL`). The code is sent as one path segment.
    async fn standings(&self, competition_code: &str) -> Result<StandingsResponse>;
}

/// football-data.org HTTP client. Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct FootballDataClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FootballDataClient {
    /// Builds a client for the public endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client for a custom base URL (proxy, mock server). A trailing `/` is ignored.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Replaces the HTTP client with one that aborts requests after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| FootballDataError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| FootballDataError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    #[tracing::instrument(skip(self, query))]
    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str], query: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint(segments)?;
        tracing::info!(
            url = %url,
            api_key = %mask_token(&self.api_key),
            "football-data request"
        );

        let mut request = self.http.get(url.clone()).header(AUTH_HEADER, &self.api_key);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "football-data non-success status");
            return Err(FootballDataError::Status(status));
        }

        let body = response.text().await?;
        tracing::debug!(url = %url, body_len = body.len(), "football-data response");
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl FootballSource for FootballDataClient {
    async fn matches(&self, date_from: NaiveDate, date_to: NaiveDate) -> Result<Vec<Match>> {
        let query = [
            ("dateFrom", date_from.format("%Y-%m-%d").to_string()),
            ("dateTo", date_to.format("%Y-%m-%d").to_string()),
        ];
        let response: MatchesResponse = self.get_json(&["matches"], &query).await?;
        Ok(response.matches)
    }

    async fn standings(&self, competition_code: &str) -> Result<StandingsResponse> {
        self.get_json(&["competitions", competition_code, "standings"], &[])
            .await
    }
}
