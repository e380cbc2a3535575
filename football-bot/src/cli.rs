//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{BotConfig, TransportMode};

#[derive(Parser)]
#[command(name = "football-bot")]
#[command(about = "Telegram bot for football matches and standings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,

        /// How updates are received.
        #[arg(short, long, value_enum, default_value_t = TransportMode::Polling)]
        mode: TransportMode,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
