//! Typed records for the two endpoints the bot reads.
//!
//! Only the fields the bot formats are modelled; everything else in the payload is ignored.
//! Team names are nullable upstream (undecided knockout fixtures), so they stay `Option`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Placeholder shown for a team whose name upstream has not published yet.
pub const UNKNOWN_TEAM: &str = "TBD";

/// Body of `GET /matches`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchesResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub competition: Competition,
    pub utc_date: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub score: Score,
}

impl Match {
    /// Kickoff as `HH:MM` in UTC.
    pub fn kickoff_hhmm(&self) -> String {
        self.utc_date.format("%H:%M").to_string()
    }

    /// `"home - away"` when both full-time goals are reported, `"0 - 0"` otherwise.
    pub fn score_line(&self) -> String {
        match self.score.full_time {
            Some(FullTime {
                home: Some(home),
                away: Some(away),
            }) => format!("{} - {}", home, away),
            _ => "0 - 0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub name: Option<String>,
}

impl TeamRef {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_TEAM)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Competition {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default)]
    pub full_time: Option<FullTime>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FullTime {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

/// Body of `GET /competitions/{code}/standings`.
#[derive(Debug, Clone, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<StandingTable>,
}

impl StandingsResponse {
    /// Tables of type `TOTAL`, in upstream order.
    pub fn total_tables(&self) -> impl Iterator<Item = &StandingTable> {
        self.standings.iter().filter(|t| t.is_total())
    }
}

/// One table of a standings payload (`TOTAL`, `HOME` or `AWAY`).
#[derive(Debug, Clone, Deserialize)]
pub struct StandingTable {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub table: Vec<TableRow>,
}

impl StandingTable {
    pub fn is_total(&self) -> bool {
        self.kind == "TOTAL"
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub position: u32,
    pub team: TeamRef,
    pub points: i32,
    pub played_games: u32,
}
