//! Binary for the demo test bot. Config from env (and `.env`), `--token` overrides BOT_TOKEN.

use anyhow::Result;
use clap::Parser;
use dbot_core::init_tracing;
use dbot_telegram::{fetch_bot_username, run_repl};
use handler_chain::HandlerChain;
use std::sync::Arc;
use test_bot::{load_config, Cli, CommandDispatcher, CommandHandler, Commands};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            init_tracing(config.log_file.as_deref())?;
            info!(
                log_file = ?config.log_file,
                api_url = ?config.telegram_api_url,
                "Bot is starting"
            );

            let bot = config.build_bot()?;
            let dispatcher = match fetch_bot_username(&bot).await {
                Some(username) => CommandDispatcher::with_bot_username(username),
                None => CommandDispatcher::new(),
            };
            let chain = HandlerChain::new().add_handler(Arc::new(CommandHandler::new(dispatcher)));

            info!("Send /start to your bot to begin testing");
            run_repl(bot, chain).await;
            Ok(())
        }
    }
}
