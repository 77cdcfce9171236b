//! # test-bot
//!
//! Demo bot for verifying a Telegram deployment: [`CommandDispatcher`] maps each
//! [`dbot_core::InboundEvent`] to at most one reply, [`CommandHandler`] plugs it into the
//! handler chain, and [`cli`] holds the command-line surface of the binary.

pub mod cli;
pub mod command;
pub mod dispatcher;
pub mod handler;
pub mod replies;

pub use cli::{load_config, Cli, Commands};
pub use command::{parse_command, Command, CommandWord};
pub use dispatcher::{CommandDispatcher, Dispatch};
pub use handler::CommandHandler;
