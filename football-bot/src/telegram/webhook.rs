//! Webhook transport: an axum router with the update endpoint, webhook registration and a health check.
//!
//! - `POST /webhook`: Telegram `Update` JSON; text commands are dispatched before responding.
//! - `GET /set_webhook`: registers `{WEBHOOK_URL}/webhook` with Telegram.
//! - `GET /health`: `OK`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use teloxide::types::{Update, UpdateKind};
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;
use crate::core::{Bot, ToInvocation};
use crate::dispatcher::Dispatcher;

/// Shared state of the webhook router.
#[derive(Clone)]
pub struct WebhookState {
    pub dispatcher: Arc<Dispatcher>,
    pub bot: Arc<dyn Bot>,
    /// Full endpoint registered by `/set_webhook`; `None` makes that route fail.
    pub webhook_endpoint: Option<String>,
}

pub fn webhook_router(state: WebhookState) -> Router {
    Router::new()
        .route("/webhook", post(receive_update))
        .route("/set_webhook", get(set_webhook))
        .route("/health", get(health))
        .with_state(state)
}

/// Binds `addr` and serves [`webhook_router`] until the process exits.
#[instrument(skip(state))]
pub async fn serve_webhook(addr: SocketAddr, state: WebhookState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Webhook server listening");
    axum::serve(listener, webhook_router(state)).await?;
    Ok(())
}

async fn receive_update(State(state): State<WebhookState>, Json(update): Json<Update>) -> Json<Value> {
    if let UpdateKind::Message(ref msg) = update.kind {
        if let Some(invocation) = TelegramMessageWrapper(msg).to_invocation() {
            info!(
                update_id = ?update.id,
                chat_id = invocation.chat.id,
                command = %invocation.command,
                "Received command via webhook"
            );
            if let Err(e) = state.dispatcher.handle(state.bot.as_ref(), &invocation).await {
                error!(error = %e, chat_id = invocation.chat.id, "Reply failed");
            }
        }
    }
    Json(json!({ "success": true }))
}

async fn set_webhook(State(state): State<WebhookState>) -> Result<String, (StatusCode, String)> {
    let Some(endpoint) = state.webhook_endpoint.as_deref() else {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "WEBHOOK_URL is not configured".to_string(),
        ));
    };

    match state.bot.set_webhook(endpoint).await {
        Ok(result) => {
            info!(endpoint = %endpoint, result, "Webhook registered");
            Ok(format!("Webhook set: {}", result))
        }
        Err(e) => {
            error!(endpoint = %endpoint, error = %e, "Webhook registration failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

async fn health() -> &'static str {
    "OK"
}
