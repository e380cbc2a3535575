//! Error types for the bot.
//!
//! [`BotError`] covers transport and startup failures; [`CommandError`] is the per-handler
//! taxonomy. Every `CommandError` carries the text the user sees, so nothing reaches the transport.

use football_data_client::FootballDataError;
use reqwest::StatusCode;
use thiserror::Error;

/// Reply for failures the user cannot act on (network, malformed upstream payload).
pub const GENERIC_ERROR_REPLY: &str = "An error occurred. Please try again later.";

/// Top-level error for transport, config and IO.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Webhook error: {0}")]
    Webhook(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for transport operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;

/// Why a command handler did not produce its normal reply.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A required argument was not given; no upstream call was made.
    #[error("missing argument")]
    MissingArgument { usage: &'static str },

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {status}")]
    UpstreamStatus {
        status: StatusCode,
        reply: &'static str,
    },

    /// Upstream answered successfully but with nothing to show.
    #[error("no data")]
    NoData { reply: &'static str },

    #[error("malformed upstream response: {0}")]
    Malformed(String),

    #[error("upstream request failed: {0}")]
    Transport(String),
}

impl CommandError {
    /// Maps a client error; `status_reply` is the handler's text for a non-success status.
    pub fn from_upstream(err: FootballDataError, status_reply: &'static str) -> Self {
        match err {
            FootballDataError::Status(status) => Self::UpstreamStatus {
                status,
                reply: status_reply,
            },
            FootballDataError::Malformed(e) => Self::Malformed(e.to_string()),
            FootballDataError::Transport(e) => Self::Transport(e.to_string()),
            e @ FootballDataError::InvalidUrl(_) => Self::Transport(e.to_string()),
        }
    }

    /// Text sent back to the chat.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingArgument { usage } => *usage,
            Self::UpstreamStatus { reply, .. } | Self::NoData { reply } => *reply,
            Self::Malformed(_) | Self::Transport(_) => GENERIC_ERROR_REPLY,
        }
    }

    /// True for failures that should be logged at error level.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Malformed(_) | Self::Transport(_))
    }
}
