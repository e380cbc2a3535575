//! Binary for the football bot. Loads `.env`, parses the CLI, runs the chosen transport.

use anyhow::Result;
use clap::Parser;
use football_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, mode } => {
            let config = load_config(token)?;
            run_bot(config, mode).await
        }
    }
}
