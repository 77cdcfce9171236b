//! REPL runner: converts teloxide messages to [`InboundEvent`]s, runs the [`HandlerChain`] and sends
//! the reply. Delivery and handler errors are logged with the update they belong to and swallowed,
//! so one failing update never stops polling.

use dbot_core::{Bot as CoreBot, HandlerResponse, InboundEvent, ToInboundEvent};
use handler_chain::HandlerChain;
#[cfg(unix)]
use std::future::Future;
use std::sync::Arc;
use teloxide::prelude::*;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
#[cfg(unix)]
use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;

/// Asks Telegram for the bot's own username. Failures are logged and yield None.
pub async fn fetch_bot_username(bot: &teloxide::Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone();
            if let Some(username) = &username {
                info!(username = %username, "Bot username resolved");
            }
            username
        }
        Err(e) => {
            warn!(error = %e, "get_me failed, continuing without bot username");
            None
        }
    }
}

/// Runs one event through the chain and delivers a `Reply` with `bot`.
/// Returns true when a reply was delivered.
#[instrument(skip(chain, bot, event), fields(chat_id = event.chat.id, message_id = %event.message_id))]
pub async fn dispatch_event(chain: &HandlerChain, bot: &dyn CoreBot, event: &InboundEvent) -> bool {
    let reply = match chain.handle(event).await {
        Ok(HandlerResponse::Reply(reply)) => reply,
        Ok(_) => return false,
        Err(e) => {
            error!(
                error = %e,
                user_id = event.user.id,
                update = ?event,
                "Handler chain failed"
            );
            return false;
        }
    };

    match bot.send_reply(&reply).await {
        Ok(()) => {
            info!(
                user_id = event.user.id,
                reply_len = reply.text.len(),
                "Sent reply"
            );
            true
        }
        Err(e) => {
            error!(
                error = %e,
                user_id = event.user.id,
                update = ?event,
                "Failed to deliver reply"
            );
            false
        }
    }
}

/// Listens for SIGTERM and runs `on_terminate` once when it arrives. The handler is registered
/// before this returns, so a SIGTERM sent afterwards never kills the process.
#[cfg(unix)]
pub fn spawn_terminate_listener<F, Fut>(on_terminate: F) -> std::io::Result<JoinHandle<()>>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let mut terminate = signal(SignalKind::terminate())?;
    Ok(tokio::spawn(async move {
        if terminate.recv().await.is_some() {
            info!("SIGTERM received, stopping polling");
            on_terminate().await;
        }
    }))
}

/// Starts long polling with the given teloxide Bot and handler chain. Returns after Ctrl-C or
/// SIGTERM once in-flight updates are done.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) {
    let adapter = TelegramBotAdapter::new(bot);
    let bot = adapter.inner().clone();
    let sender: Arc<dyn CoreBot> = Arc::new(adapter);
    let chain = handler_chain;

    info!(handlers = chain.len(), "Bot is running and ready to receive messages");

    let handler = Update::filter_message().endpoint(move |msg: teloxide::types::Message| {
        let chain = chain.clone();
        let sender = sender.clone();

        async move {
            let event = TelegramMessageWrapper(&msg).to_event();

            match event.text.as_deref() {
                Some(text) => info!(
                    user_id = event.user.id,
                    chat_id = event.chat.id,
                    message_content = %text,
                    "Received message"
                ),
                None => info!(
                    user_id = event.user.id,
                    chat_id = event.chat.id,
                    "Received non-text message"
                ),
            }

            dispatch_event(&chain, sender.as_ref(), &event).await;
            respond(())
        }
    });

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build();

    #[cfg(unix)]
    let terminate_listener = {
        let token = dispatcher.shutdown_token();
        match spawn_terminate_listener(move || async move {
            match token.shutdown() {
                Ok(done) => done.await,
                Err(e) => warn!(error = ?e, "Shutdown requested while dispatcher idle"),
            }
        }) {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                None
            }
        }
    };

    dispatcher.dispatch().await;

    #[cfg(unix)]
    if let Some(handle) = terminate_listener {
        handle.abort();
    }

    info!("Shutting down bot");
}
