//! # Football bot
//!
//! Telegram bot answering `/start`, `/help`, `/matches`, `/standings <code>` and `/fact`.
//! Core (Invocation, CommandHandler, Bot, errors), the dispatcher and its handlers are transport-agnostic;
//! the telegram module adapts teloxide (polling) and axum (webhook) to them.

pub mod cli;
pub mod config;
pub mod core;
pub mod dispatcher;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, Bot, BotError, Chat, CommandError, CommandHandler, Invocation, Result,
    ToInvocation, GENERIC_ERROR_REPLY,
};

pub use config::{BotConfig, TransportMode};
pub use dispatcher::Dispatcher;
pub use handlers::{FactHandler, FactSelection, MatchesHandler, StandingsHandler, StaticTextHandler};
pub use runner::{build_dispatcher, build_football_source, run_bot};
pub use telegram::{
    run_polling, serve_webhook, webhook_router, TelegramBotAdapter, TelegramMessageWrapper,
    WebhookState,
};
