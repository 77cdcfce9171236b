//! Mock implementation of [`dbot_core::Bot`] for integration tests.
//!
//! Records every sent message so tests can assert on the reply without hitting Telegram.

use async_trait::async_trait;
use dbot_core::{Bot, DbotError, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One recorded call to `send_message(chat_id, text)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

/// Mock Bot that forwards each sent message to a channel; optionally fails every send.
pub struct MockBot {
    sent_tx: mpsc::UnboundedSender<SentRecord>,
    fail: bool,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for sent records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SentRecord>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sent_tx, fail: false }), sent_rx)
    }

    /// Creates a MockBot whose sends all fail with a delivery error (still recorded).
    pub fn failing() -> (Arc<Self>, mpsc::UnboundedReceiver<SentRecord>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sent_tx, fail: true }), sent_rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let _ = self.sent_tx.send(SentRecord {
            chat_id,
            text: text.to_string(),
        });
        if self.fail {
            return Err(DbotError::Delivery("network unreachable".to_string()));
        }
        Ok(())
    }
}
