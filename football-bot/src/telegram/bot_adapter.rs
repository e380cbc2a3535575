//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::{requests::Requester, types::ChatId};

use crate::core::{Bot as CoreBot, BotError, Chat, Result};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Builds the teloxide bot, pointing it at `api_url` when given (local Bot API server, mocks).
    pub fn from_token(token: &str, api_url: Option<&str>) -> Result<Self> {
        let mut bot = teloxide::Bot::new(token);
        if let Some(url) = api_url {
            let url = reqwest::Url::parse(url)
                .map_err(|e| BotError::Config(format!("invalid Telegram API URL {}: {}", url, e)))?;
            bot = bot.set_api_url(url);
        }
        Ok(Self::new(bot))
    }

    /// Underlying teloxide::Bot for polling and direct API use.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn set_webhook(&self, url: &str) -> Result<bool> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| BotError::Webhook(format!("invalid webhook URL {}: {}", url, e)))?;
        self.bot
            .set_webhook(url)
            .await
            .map_err(|e| BotError::Webhook(e.to_string()))?;
        Ok(true)
    }
}
