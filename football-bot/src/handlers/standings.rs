//! `/standings <code>`: league table for one competition.

use std::sync::Arc;

use async_trait::async_trait;
use football_data_client::{FootballSource, StandingsResponse};
use tracing::{info, instrument};

use crate::core::{CommandError, CommandHandler, Invocation};

pub const STANDINGS_USAGE: &str = "Please specify a competition code (e.g., /standings PL).";
pub const STANDINGS_FETCH_FAILED: &str =
    "Failed to fetch standings. Please check the competition code and try again.";
pub const NO_STANDINGS: &str = "No standings found for this competition.";

pub struct StandingsHandler {
    source: Arc<dyn FootballSource>,
}

impl StandingsHandler {
    pub fn new(source: Arc<dyn FootballSource>) -> Self {
        Self { source }
    }
}

/// Renders the `TOTAL` tables in upstream order. Other table types are skipped.
pub fn format_standings(code: &str, standings: &StandingsResponse) -> String {
    let mut message = format!("Standings for {}:\n\n", code);
    for table in standings.total_tables() {
        for row in &table.table {
            message.push_str(&format!(
                "{}. {} - {} pts ({} games)\n",
                row.position,
                row.team.display_name(),
                row.points,
                row.played_games
            ));
        }
    }
    message
}

#[async_trait]
impl CommandHandler for StandingsHandler {
    #[instrument(skip(self, invocation), fields(chat_id = invocation.chat.id))]
    async fn handle(&self, invocation: &Invocation) -> Result<String, CommandError> {
        let code = invocation
            .arg(0)
            .ok_or(CommandError::MissingArgument {
                usage: STANDINGS_USAGE,
            })?
            .to_uppercase();

        let standings = self
            .source
            .standings(&code)
            .await
            .map_err(|e| CommandError::from_upstream(e, STANDINGS_FETCH_FAILED))?;

        if standings.standings.is_empty() {
            return Err(CommandError::NoData {
                reply: NO_STANDINGS,
            });
        }

        info!(competition = %code, tables = standings.standings.len(), "Formatting standings");
        Ok(format_standings(&code, &standings))
    }
}
