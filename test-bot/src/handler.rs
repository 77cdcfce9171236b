//! [`Handler`] adapter for [`CommandDispatcher`].

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, InboundEvent, Result};
use tracing::{debug, info};

use crate::command::CommandWord;
use crate::dispatcher::CommandDispatcher;

/// Answers commands and free text; everything else is left to later handlers.
pub struct CommandHandler {
    dispatcher: CommandDispatcher,
}

impl CommandHandler {
    pub fn new(dispatcher: CommandDispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let Some(dispatch) = self.dispatcher.dispatch(event) else {
            debug!(user_id = event.user.id, "Ignoring message without text");
            return Ok(HandlerResponse::Ignore);
        };

        match &dispatch.word {
            CommandWord::Known(command) => info!(
                user_id = event.user.id,
                chat_id = event.chat.id,
                command = %command,
                "Handling command"
            ),
            CommandWord::NotCommand => info!(
                user_id = event.user.id,
                chat_id = event.chat.id,
                "Handling free text"
            ),
            CommandWord::Unknown(word) => debug!(
                user_id = event.user.id,
                chat_id = event.chat.id,
                command = %word,
                "Ignoring unknown command"
            ),
        }

        Ok(match dispatch.reply {
            Some(reply) => HandlerResponse::Reply(reply),
            None => HandlerResponse::Ignore,
        })
    }
}
