//! Outbound side of the messaging transport.
//!
//! [`Bot`] is transport-agnostic; `telegram::TelegramBotAdapter` implements it via teloxide and
//! tests substitute a recording mock.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::Chat;

#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Registers `url` as the webhook that receives updates. Returns the transport's acknowledgement.
    async fn set_webhook(&self, url: &str) -> Result<bool>;
}
