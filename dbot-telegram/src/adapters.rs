//! Adapters from Telegram (teloxide) types to dbot_core types.

use dbot_core::{Chat, InboundEvent, ToInboundEvent, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()).filter(|name| !name.is_empty()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Platform name of the chat kind: `private`, `group`, `supergroup` or `channel`.
pub fn chat_type_name(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "group"
    }
}

/// Wraps a teloxide Message for conversion to [`InboundEvent`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToInboundEvent for TelegramMessageWrapper<'a> {
    fn to_event(&self) -> InboundEvent {
        let msg = self.0;
        let user = msg
            .from
            .as_ref()
            .map(|u| TelegramUserWrapper(u).to_core())
            .unwrap_or_default();
        let chat = Chat {
            id: msg.chat.id.0,
            chat_type: chat_type_name(&msg.chat).to_string(),
            title: msg.chat.title().map(str::to_string),
        };
        InboundEvent::new(
            msg.id.0.to_string(),
            user,
            chat,
            msg.text().map(str::to_string),
        )
    }
}
