//! Converts teloxide messages into core [`Invocation`]s.

use crate::core::{Chat, Invocation, ToInvocation};

/// Wraps a teloxide message for conversion. Only text messages starting with `/` convert.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl TelegramMessageWrapper<'_> {
    fn chat(&self) -> Chat {
        let chat = &self.0.chat;
        let chat_type = if chat.is_private() {
            "private"
        } else if chat.is_group() {
            "group"
        } else if chat.is_supergroup() {
            "supergroup"
        } else {
            "channel"
        };
        Chat {
            id: chat.id.0,
            chat_type: chat_type.to_string(),
        }
    }
}

impl ToInvocation for TelegramMessageWrapper<'_> {
    fn to_invocation(&self) -> Option<Invocation> {
        let invocation = Invocation::parse(self.0.text()?, self.chat())?;
        Some(match self.0.from.as_ref() {
            Some(user) => invocation.with_user(user.id.0 as i64),
            None => invocation,
        })
    }
}
