//! # dbot-telegram
//!
//! Telegram layer: adapters from teloxide types, [`dbot_core::Bot`] implementation, minimal env
//! config and the REPL runner. Handles only Telegram connectivity and handler-chain execution;
//! command semantics live in the bot crates.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{chat_type_name, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{dispatch_event, fetch_bot_username, run_repl};
#[cfg(unix)]
pub use runner::spawn_terminate_listener;
