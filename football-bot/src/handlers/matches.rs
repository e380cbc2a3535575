//! `/matches`: today's fixtures from football-data.org.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use football_data_client::{FootballSource, Match};
use tracing::{info, instrument};

use crate::core::{CommandError, CommandHandler, Invocation};

pub const MATCHES_FETCH_FAILED: &str = "Failed to fetch match data. Please try again later.";
pub const NO_MATCHES_TODAY: &str = "No matches today. Check back tomorrow!";

/// Lists matches kicking off on the current UTC date (or a pinned date).
pub struct MatchesHandler {
    source: Arc<dyn FootballSource>,
    pinned_date: Option<NaiveDate>,
}

impl MatchesHandler {
    pub fn new(source: Arc<dyn FootballSource>) -> Self {
        Self {
            source,
            pinned_date: None,
        }
    }

    /// Always query `date` instead of today.
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.pinned_date = Some(date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.pinned_date.unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// Renders the reply for a non-empty match list.
pub fn format_matches(matches: &[Match]) -> String {
    let mut message = String::from("Today's matches:\n\n");
    for m in matches {
        message.push_str(&format!(
            "⚽ {} vs {}\n",
            m.home_team.display_name(),
            m.away_team.display_name()
        ));
        message.push_str(&format!("🏆 {}\n", m.competition.name));
        message.push_str(&format!("⏰ {} UTC\n", m.kickoff_hhmm()));
        message.push_str(&format!("📊 {} ({})\n\n", m.score_line(), m.status));
    }
    message
}

#[async_trait]
impl CommandHandler for MatchesHandler {
    #[instrument(skip(self, invocation), fields(chat_id = invocation.chat.id))]
    async fn handle(&self, invocation: &Invocation) -> Result<String, CommandError> {
        let today = self.today();
        let matches = self
            .source
            .matches(today, today)
            .await
            .map_err(|e| CommandError::from_upstream(e, MATCHES_FETCH_FAILED))?;

        if matches.is_empty() {
            return Err(CommandError::NoData {
                reply: NO_MATCHES_TODAY,
            });
        }

        info!(date = %today, count = matches.len(), "Formatting matches");
        Ok(format_matches(&matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_matches_layout() {
        let body = r#"[{
            "homeTeam": {"name": "Inter"},
            "awayTeam": {"name": "Milan"},
            "competition": {"name": "Serie A"},
            "utcDate": "2024-04-22T18:45:00Z",
            "status": "FINISHED",
            "score": {"fullTime": {"home": 2, "away": 1}}
        }]"#;
        let matches: Vec<Match> = serde_json::from_str(body).unwrap();

        assert_eq!(
            format_matches(&matches),
            "Today's matches:\n\n⚽ Inter vs Milan\n🏆 Serie A\n⏰ 18:45 UTC\n📊 2 - 1 (FINISHED)\n\n"
        );
    }
}
