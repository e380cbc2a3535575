//! CommandHandler trait and the transport conversion trait.

use async_trait::async_trait;

use super::invocation::Invocation;
use crate::core::error::CommandError;

/// Converts a transport-specific message into an [`Invocation`]. `None` when the message is not a command.
pub trait ToInvocation: Send + Sync {
    fn to_invocation(&self) -> Option<Invocation>;
}

/// Handler bound to one command name. Returns the reply text, or a [`CommandError`] whose
/// [`CommandError::user_message`] the dispatcher sends instead.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, invocation: &Invocation) -> Result<String, CommandError>;
}
