//! BotConfig: Telegram connectivity, upstream API, webhook server, logging. Loaded from env.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use football_data_client::DEFAULT_BASE_URL;

use crate::handlers::FactSelection;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_LOG_FILE: &str = "logs/football-bot.log";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// How updates reach the bot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TransportMode {
    /// Long polling via getUpdates.
    #[default]
    Polling,
    /// HTTP server receiving updates on `/webhook`.
    Webhook,
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN (or TELEGRAM_TOKEN)
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// FOOTBALL_API_KEY
    pub football_api_key: String,
    /// FOOTBALL_API_URL
    pub football_api_url: String,
    /// FOOTBALL_API_TIMEOUT_SECS
    pub football_api_timeout_secs: u64,
    /// WEBHOOK_URL: public base URL; `/webhook` is appended when registering.
    pub webhook_url: Option<String>,
    /// LISTEN_ADDR
    pub listen_addr: String,
    /// LOG_FILE
    pub log_file: String,
    /// FACT_RANDOMIZE
    pub fact_selection: FactSelection,
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Case-insensitive boolean: `1/true/yes/on` → Random, `0/false/no/off` → First.
fn parse_fact_randomize(value: &str) -> Result<FactSelection> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(FactSelection::Random),
        "0" | "false" | "no" | "off" => Ok(FactSelection::First),
        _ => anyhow::bail!("FACT_RANDOMIZE is not a boolean: {}", value),
    }
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Call validate() after load to check values before starting.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| non_empty_var("BOT_TOKEN"))
            .or_else(|| non_empty_var("TELEGRAM_TOKEN"))
            .context("BOT_TOKEN not set")?;
        let football_api_key = non_empty_var("FOOTBALL_API_KEY").context("FOOTBALL_API_KEY not set")?;
        let football_api_url =
            non_empty_var("FOOTBALL_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let football_api_timeout_secs = match non_empty_var("FOOTBALL_API_TIMEOUT_SECS") {
            Some(s) => {
                let secs: u64 = s
                    .trim()
                    .parse()
                    .with_context(|| format!("FOOTBALL_API_TIMEOUT_SECS is not a number: {}", s))?;
                if secs == 0 {
                    anyhow::bail!("FOOTBALL_API_TIMEOUT_SECS must be at least 1");
                }
                secs
            }
            None => DEFAULT_API_TIMEOUT_SECS,
        };
        let telegram_api_url =
            non_empty_var("TELEGRAM_API_URL").or_else(|| non_empty_var("TELOXIDE_API_URL"));
        let webhook_url = non_empty_var("WEBHOOK_URL").map(|u| u.trim_end_matches('/').to_string());
        let listen_addr =
            non_empty_var("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let log_file = non_empty_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        let fact_selection = match non_empty_var("FACT_RANDOMIZE") {
            Some(v) => parse_fact_randomize(&v)?,
            None => FactSelection::First,
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            football_api_key,
            football_api_url,
            football_api_timeout_secs,
            webhook_url,
            listen_addr,
            log_file,
            fact_selection,
        })
    }

    /// Checks URLs and the listen address; webhook mode also requires WEBHOOK_URL.
    pub fn validate(&self, mode: TransportMode) -> Result<()> {
        if let Some(ref url) = self.telegram_api_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url
                );
            }
        }
        if reqwest::Url::parse(&self.football_api_url).is_err() {
            anyhow::bail!("FOOTBALL_API_URL is not a valid URL: {}", self.football_api_url);
        }
        if let Some(ref url) = self.webhook_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("WEBHOOK_URL is not a valid URL: {}", url);
            }
        }
        if mode == TransportMode::Webhook {
            if self.webhook_url.is_none() {
                anyhow::bail!("WEBHOOK_URL must be set in webhook mode");
            }
            self.socket_addr()?;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr
            .parse()
            .with_context(|| format!("LISTEN_ADDR is not a socket address: {}", self.listen_addr))
    }

    pub fn football_api_timeout(&self) -> Duration {
        Duration::from_secs(self.football_api_timeout_secs)
    }

    /// Full webhook endpoint registered with Telegram, e.g. `https://host/webhook`.
    pub fn webhook_endpoint(&self) -> Option<String> {
        self.webhook_url.as_ref().map(|base| format!("{}/webhook", base))
    }
}
