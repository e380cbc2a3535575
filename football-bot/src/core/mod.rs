//! Core types and traits: Invocation, Chat, CommandHandler, Bot, errors, logger.
//! Transport-agnostic; the telegram module converts teloxide types into these.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, CommandError, Result, GENERIC_ERROR_REPLY};
pub use logger::init_tracing;
pub use types::{Chat, CommandHandler, Invocation, ToInvocation};
