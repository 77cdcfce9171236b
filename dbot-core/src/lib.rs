//! # dbot-core
//!
//! Core types and traits for the bot: [`InboundEvent`], [`OutboundReply`], [`Handler`], [`Bot`],
//! the error taxonomy and tracing initialization. Transport-agnostic; used by dbot-telegram,
//! handler-chain and the bot binaries.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{
    command_args, Chat, Handler, HandlerResponse, InboundEvent, OutboundReply, ToInboundEvent,
    User, COMMAND_MARKER,
};
