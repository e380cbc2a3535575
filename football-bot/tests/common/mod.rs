//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod log_capture;
pub mod mock_bot;

use football_bot::{Chat, Invocation};

/// Parses `text` as a command from private chat 456.
pub fn invocation(text: &str) -> Invocation {
    Invocation::parse(text, Chat::private(456))
        .expect("test text must be a command")
        .with_user(123)
}
