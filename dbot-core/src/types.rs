//! Core types: user, chat, inbound event, outbound reply, handler response, and Handler trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Leading character that marks a message as a command.
pub const COMMAND_MARKER: char = '/';

/// Sender identity (id, username, names).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat identity. `chat_type` is one of `private`, `group`, `supergroup`, `channel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
    pub title: Option<String>,
}

/// A single received message, normalized by the transport layer. Read-only to handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Transport message id; only used for logging.
    pub message_id: String,
    pub user: User,
    pub chat: Chat,
    pub text: Option<String>,
    /// Tokens after the command word. Empty unless `text` starts with [`COMMAND_MARKER`].
    #[serde(default)]
    pub command_args: Vec<String>,
}

impl InboundEvent {
    /// Builds an event from raw text, deriving `command_args` the same way the transport does.
    pub fn new(message_id: impl Into<String>, user: User, chat: Chat, text: Option<String>) -> Self {
        let command_args = text.as_deref().map(command_args).unwrap_or_default();
        Self {
            message_id: message_id.into(),
            user,
            chat,
            text,
            command_args,
        }
    }
}

/// A reply to send back; consumed once by [`crate::Bot::send_reply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundReply {
    pub chat_id: i64,
    pub text: String,
}

impl OutboundReply {
    /// Reply addressed to the chat the event came from.
    pub fn to_chat(chat: &Chat, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat.id,
            text: text.into(),
        }
    }
}

/// Splits a command message into its arguments: whitespace-separated tokens after the command word.
/// Returns an empty vec for text that is not a command.
pub fn command_args(text: &str) -> Vec<String> {
    if !text.starts_with(COMMAND_MARKER) {
        return Vec::new();
    }
    text.split_whitespace().skip(1).map(str::to_string).collect()
}

/// Handler result for the chain. `Reply` carries the reply so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no reply.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and send this reply.
    Reply(OutboundReply),
}

/// Converts a transport-specific message type to [`InboundEvent`].
pub trait ToInboundEvent: Send + Sync {
    fn to_event(&self) -> InboundEvent;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _event: &InboundEvent) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the event. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _event: &InboundEvent) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _event: &InboundEvent,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
