//! Errors returned by the football-data.org client.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single upstream request.
#[derive(Error, Debug)]
pub enum FootballDataError {
    /// Upstream answered with a non-2xx status.
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    /// Body did not match the expected record shape.
    #[error("malformed upstream response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Base URL cannot carry path segments.
    #[error("invalid upstream base URL: {0}")]
    InvalidUrl(String),

    /// Connection, TLS, timeout or body read failure.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for client operations; uses [`FootballDataError`].
pub type Result<T> = std::result::Result<T, FootballDataError>;
