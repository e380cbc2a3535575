//! # Command dispatcher
//!
//! Maps a command name to exactly one handler. Unknown commands get no reply. Handler errors are
//! turned into their user-facing text here, so transports only ever see `Option<String>`.

use std::collections::HashMap;
use std::sync::Arc;

use football_data_client::FootballSource;
use tracing::{debug, error, info, instrument, warn};

use crate::core::{Bot, CommandHandler, Invocation, Result};
use crate::handlers::{
    FactHandler, FactSelection, MatchesHandler, StandingsHandler, StaticTextHandler,
};

/// Immutable after construction; share as `Arc<Dispatcher>`.
#[derive(Clone, Default)]
pub struct Dispatcher {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl Dispatcher {
    /// Creates a dispatcher with no commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` (without `/`, case-insensitive) to `handler`, replacing any earlier binding.
    pub fn register(mut self, name: &str, handler: Arc<dyn CommandHandler>) -> Self {
        self.handlers.insert(name.to_lowercase(), handler);
        self
    }

    /// `start`, `help`, `matches`, `standings` and `fact`.
    pub fn standard(source: Arc<dyn FootballSource>, facts: FactSelection) -> Self {
        Self::new()
            .register("start", Arc::new(StaticTextHandler::start()))
            .register("help", Arc::new(StaticTextHandler::help()))
            .register("matches", Arc::new(MatchesHandler::new(source.clone())))
            .register("standings", Arc::new(StandingsHandler::new(source)))
            .register("fact", Arc::new(FactHandler::new(facts)))
    }

    /// Registered command names, sorted.
    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Runs the handler for `invocation.command`. `None` when no handler is registered.
    #[instrument(skip(self, invocation), fields(command = %invocation.command, chat_id = invocation.chat.id))]
    pub async fn dispatch(&self, invocation: &Invocation) -> Option<String> {
        let Some(handler) = self.handlers.get(&invocation.command) else {
            debug!("Unknown command, no reply");
            return None;
        };

        match handler.handle(invocation).await {
            Ok(reply) => {
                info!(reply_len = reply.len(), "Command handled");
                Some(reply)
            }
            Err(e) if e.is_unexpected() => {
                error!(error = %e, args = ?invocation.args, "Command failed");
                Some(e.user_message().to_string())
            }
            Err(e) => {
                warn!(error = %e, "Command finished without data");
                Some(e.user_message().to_string())
            }
        }
    }

    /// Dispatches and sends the reply (if any) to the invocation's chat. Returns whether a reply was sent.
    pub async fn handle(&self, bot: &dyn Bot, invocation: &Invocation) -> Result<bool> {
        let Some(reply) = self.dispatch(invocation).await else {
            return Ok(false);
        };

        if let Err(e) = bot.send_message(&invocation.chat, &reply).await {
            error!(
                error = %e,
                chat_id = invocation.chat.id,
                command = %invocation.command,
                "Failed to send reply"
            );
            return Err(e);
        }
        Ok(true)
    }
}
