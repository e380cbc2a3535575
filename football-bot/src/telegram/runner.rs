//! Long-polling runner: converts teloxide messages to invocations and hands them to the dispatcher.

use std::sync::Arc;

use anyhow::Result;
use teloxide::{requests::Requester, respond};
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;
use crate::core::ToInvocation;
use crate::dispatcher::Dispatcher;

/// Starts the teloxide REPL. Each command is dispatched in its own task so the REPL returns immediately.
#[instrument(skip(bot, dispatcher))]
pub async fn run_polling(bot: TelegramBotAdapter, dispatcher: Arc<Dispatcher>) -> Result<()> {
    match bot.inner().get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Bot identity resolved"),
        Err(e) => error!(error = %e, "getMe failed; polling anyway"),
    }

    teloxide::repl(
        bot.inner().clone(),
        move |tg_bot: teloxide::Bot, msg: teloxide::types::Message| {
            let dispatcher = dispatcher.clone();

            async move {
                let Some(invocation) = TelegramMessageWrapper(&msg).to_invocation() else {
                    return respond(());
                };
                info!(
                    user_id = ?invocation.user_id,
                    chat_id = invocation.chat.id,
                    command = %invocation.command,
                    "Received command"
                );

                let reply_bot = TelegramBotAdapter::new(tg_bot);
                tokio::spawn(async move {
                    if let Err(e) = dispatcher.handle(&reply_bot, &invocation).await {
                        error!(error = %e, chat_id = invocation.chat.id, "Reply failed");
                    }
                });

                respond(())
            }
        },
    )
    .await;

    Ok(())
}
