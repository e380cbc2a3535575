//! One incoming command plus its arguments and conversation context.

use serde::{Deserialize, Serialize};

use super::chat::Chat;

/// A parsed bot command. Created per incoming message, consumed once by the matching handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Command name without the leading `/` and `@botname` suffix, lowercased.
    pub command: String,
    pub args: Vec<String>,
    pub chat: Chat,
    pub user_id: Option<i64>,
}

impl Invocation {
    /// Parses `/name[@bot] arg1 arg2 ...`. Returns `None` for text that is not a command.
    pub fn parse(text: &str, chat: Chat) -> Option<Self> {
        let mut parts = text.trim().split_whitespace();
        let head = parts.next()?.strip_prefix('/')?;
        let name = head.split('@').next().unwrap_or_default();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            command: name.to_lowercase(),
            args: parts.map(str::to_string).collect(),
            chat,
            user_id: None,
        })
    }

    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Positional argument, if present.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}
