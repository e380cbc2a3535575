//! Mock implementation of [`football_bot::Bot`] for integration tests.
//!
//! Records every `send_message` and `set_webhook` call so tests can assert on the reply text
//! without hitting Telegram.

use std::sync::Mutex;

use async_trait::async_trait;
use football_bot::{Bot, BotError, Chat, Result};

/// One recorded call to `send_message(chat, text)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentMessage>>,
    webhooks: Mutex<Vec<String>>,
    /// When true, both methods fail with a transport error.
    failing: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn webhooks(&self) -> Vec<String> {
        self.webhooks.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.failing {
            return Err(BotError::Transport("mock send failure".to_string()));
        }
        self.sent.lock().unwrap().push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn set_webhook(&self, url: &str) -> Result<bool> {
        if self.failing {
            return Err(BotError::Webhook("mock webhook failure".to_string()));
        }
        self.webhooks.lock().unwrap().push(url.to_string());
        Ok(true)
    }
}
