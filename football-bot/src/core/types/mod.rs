//! Core types: chat, invocation, and the CommandHandler trait.

mod chat;
mod handler;
mod invocation;

pub use chat::Chat;
pub use handler::{CommandHandler, ToInvocation};
pub use invocation::Invocation;
