//! Bot configuration loaded from environment variables (after `.env` via dotenvy).

mod bot_config;


pub use bot_config::{
    BotConfig, TransportMode, DEFAULT_API_TIMEOUT_SECS, DEFAULT_LISTEN_ADDR, DEFAULT_LOG_FILE,
};
