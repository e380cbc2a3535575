//! `/start` and `/help`: fixed text, no I/O, arguments ignored.

use async_trait::async_trait;

use crate::core::{CommandError, CommandHandler, Invocation};

pub const START_TEXT: &str = "Welcome to Football Matches Bot! ⚽\n\
Use /matches to see today's matches.\n\
Use /standings to see league standings.\n\
Use /fact to get a football fact.\n\
Use /help for more info.";

pub const HELP_TEXT: &str = "Available commands:\n\
/start - Start the bot\n\
/matches - Show today's matches\n\
/standings [competition_code] - Show league standings (e.g., /standings PL)\n\
/fact - Show a football fact\n\
/help - Show this help message";

/// Replies with the same text on every invocation.
#[derive(Debug, Clone, Copy)]
pub struct StaticTextHandler {
    text: &'static str,
}

impl StaticTextHandler {
    pub fn new(text: &'static str) -> Self {
        Self { text }
    }

    pub fn start() -> Self {
        Self::new(START_TEXT)
    }

    pub fn help() -> Self {
        Self::new(HELP_TEXT)
    }
}

#[async_trait]
impl CommandHandler for StaticTextHandler {
    async fn handle(&self, _invocation: &Invocation) -> Result<String, CommandError> {
        Ok(self.text.to_string())
    }
}
