//! Startup: validate config, init logging, build the dispatcher, run the chosen transport.

use std::sync::Arc;

use anyhow::Result;
use football_data_client::{mask_token, FootballDataClient, FootballSource};
use tracing::{info, instrument};

use crate::config::{BotConfig, TransportMode};
use crate::core::init_tracing;
use crate::dispatcher::Dispatcher;
use crate::telegram::{run_polling, serve_webhook, TelegramBotAdapter, WebhookState};

/// Upstream client configured from `config` (base URL, API key, timeout).
pub fn build_football_source(config: &BotConfig) -> Result<Arc<dyn FootballSource>> {
    let client = FootballDataClient::with_base_url(
        config.football_api_key.clone(),
        config.football_api_url.clone(),
    )
    .with_timeout(config.football_api_timeout())?;
    Ok(Arc::new(client))
}

/// Standard dispatcher wired to the upstream client.
pub fn build_dispatcher(config: &BotConfig) -> Result<Dispatcher> {
    let source = build_football_source(config)?;
    Ok(Dispatcher::standard(source, config.fact_selection))
}

/// Main entry: validate config, init logging, build dispatcher and bot, then poll or serve the webhook.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig, mode: TransportMode) -> Result<()> {
    config.validate(mode)?;
    init_tracing(&config.log_file)?;

    let dispatcher = Arc::new(build_dispatcher(&config)?);
    let bot = TelegramBotAdapter::from_token(&config.bot_token, config.telegram_api_url.as_deref())?;

    info!(
        mode = ?mode,
        football_api_url = %config.football_api_url,
        football_api_key = %mask_token(&config.football_api_key),
        commands = ?dispatcher.commands(),
        fact_selection = ?config.fact_selection,
        "Bot starting"
    );

    match mode {
        TransportMode::Polling => run_polling(bot, dispatcher).await,
        TransportMode::Webhook => {
            let state = WebhookState {
                dispatcher,
                bot: Arc::new(bot),
                webhook_endpoint: config.webhook_endpoint(),
            };
            serve_webhook(config.socket_addr()?, state).await
        }
    }
}
