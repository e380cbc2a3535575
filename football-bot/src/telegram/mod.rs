//! Telegram transport layer: message adapter, Bot implementation, polling runner, webhook server.

mod adapters;
mod bot_adapter;
mod runner;
mod webhook;

pub use adapters::TelegramMessageWrapper;
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_polling;
pub use webhook::{serve_webhook, webhook_router, WebhookState};
