//! Maps one inbound event to at most one reply. Pure apart from reading the clock for `/ping`.

use chrono::{DateTime, Utc};
use dbot_core::{InboundEvent, OutboundReply};

use crate::command::{parse_command, Command, CommandWord};
use crate::replies;

/// What the dispatcher made of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub word: CommandWord,
    pub reply: Option<OutboundReply>,
}

/// Stateless command dispatcher; safe to share across tasks.
#[derive(Debug, Clone, Default)]
pub struct CommandDispatcher {
    bot_username: Option<String>,
}

impl CommandDispatcher {
    /// Dispatcher that accepts `/cmd@anybot` suffixes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher that ignores commands addressed to a bot other than `username`.
    pub fn with_bot_username(username: impl Into<String>) -> Self {
        Self {
            bot_username: Some(username.into()),
        }
    }

    pub fn bot_username(&self) -> Option<&str> {
        self.bot_username.as_deref()
    }

    /// Classifies the event's text; `None` for messages that are not text.
    pub fn classify(&self, event: &InboundEvent) -> Option<CommandWord> {
        let text = event.text.as_deref().filter(|text| !text.is_empty())?;
        Some(parse_command(text, self.bot_username()))
    }

    /// Reply for `event`, if any.
    pub fn handle(&self, event: &InboundEvent) -> Option<OutboundReply> {
        self.handle_at(event, Utc::now())
    }

    /// Like [`Self::handle`] with an explicit timestamp for `/ping`.
    pub fn handle_at(&self, event: &InboundEvent, now: DateTime<Utc>) -> Option<OutboundReply> {
        self.dispatch_at(event, now)?.reply
    }

    /// Classification and reply in one pass; `None` for messages without text.
    pub fn dispatch(&self, event: &InboundEvent) -> Option<Dispatch> {
        self.dispatch_at(event, Utc::now())
    }

    pub fn dispatch_at(&self, event: &InboundEvent, now: DateTime<Utc>) -> Option<Dispatch> {
        let word = self.classify(event)?;
        let text = match &word {
            CommandWord::Known(command) => Some(Self::run_command(*command, event, now)),
            CommandWord::Unknown(_) => None,
            CommandWord::NotCommand => event.text.as_deref().map(replies::free_text),
        };
        Some(Dispatch {
            word,
            reply: text.map(|text| OutboundReply::to_chat(&event.chat, text)),
        })
    }

    fn run_command(command: Command, event: &InboundEvent, now: DateTime<Utc>) -> String {
        match command {
            Command::Start => replies::welcome(&event.user),
            Command::Help => replies::HELP.to_string(),
            Command::Ping => replies::pong(now),
            Command::Info => replies::info(&event.chat, &event.user),
            Command::Echo => replies::echo(&event.command_args)
                .unwrap_or_else(|| replies::ECHO_USAGE.to_string()),
        }
    }
}
