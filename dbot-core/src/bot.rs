//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide and tests use a mock.

use crate::error::Result;
use crate::types::OutboundReply;
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat id.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()>;

    /// Delivers a reply produced by a handler.
    async fn send_reply(&self, reply: &OutboundReply) -> Result<()> {
        self.send_message(reply.chat_id, &reply.text).await
    }
}
