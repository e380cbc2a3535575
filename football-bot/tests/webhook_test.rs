//! Integration tests for the webhook router (`/webhook`, `/set_webhook`, `/health`).
//!
//! Each test serves [`football_bot::webhook_router`] on an ephemeral local port and talks to it with
//! reqwest. Replies go to a recording [`MockBot`] instead of Telegram.

mod common;

use std::net::SocketAddr;
use std::sync::Arc;

use football_bot::handlers::START_TEXT;
use football_bot::{webhook_router, Dispatcher, FactSelection, WebhookState};
use football_data_client::FootballDataClient;
use serde_json::{json, Value};

use common::mock_bot::{MockBot, SentMessage};

/// Serves the router on 127.0.0.1:0 and returns its address.
async fn spawn_server(bot: Arc<MockBot>, webhook_endpoint: Option<String>) -> SocketAddr {
    let source = Arc::new(FootballDataClient::with_base_url(
        "unused-key".to_string(),
        "http://127.0.0.1:1".to_string(),
    ));
    let state = WebhookState {
        dispatcher: Arc::new(Dispatcher::standard(source, FactSelection::First)),
        bot,
        webhook_endpoint,
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, webhook_router(state)).await.unwrap();
    });
    addr
}

fn command_update(text: &str) -> Value {
    json!({
        "update_id": 10,
        "message": {
            "message_id": 1,
            "date": 1706529600,
            "chat": {"id": 456, "type": "private", "first_name": "Test"},
            "from": {"id": 123, "is_bot": false, "first_name": "Test"},
            "text": text
        }
    })
}

/// **Test: `/health` returns `OK`.**
#[tokio::test]
async fn test_health() {
    let addr = spawn_server(Arc::new(MockBot::new()), None).await;

    let resp = reqwest::get(format!("http://{}/health", addr)).await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

/// **Test: `POST /webhook` with a `/start` update sends the welcome text and answers success.**
#[tokio::test]
async fn test_webhook_dispatches_command() {
    let bot = Arc::new(MockBot::new());
    let addr = spawn_server(bot.clone(), None).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{}/webhook", addr))
        .json(&command_update("/start"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"success": true}));
    assert_eq!(
        bot.sent(),
        vec![SentMessage {
            chat_id: 456,
            text: START_TEXT.to_string(),
        }]
    );
}

/// **Test: Non-command text is acknowledged without a reply.**
#[tokio::test]
async fn test_webhook_ignores_plain_text() {
    let bot = Arc::new(MockBot::new());
    let addr = spawn_server(bot.clone(), None).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{}/webhook", addr))
        .json(&command_update("good game yesterday"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(bot.sent().is_empty());
}

/// **Test: `/set_webhook` registers `{WEBHOOK_URL}/webhook` through the Bot.**
#[tokio::test]
async fn test_set_webhook_registers_endpoint() {
    let bot = Arc::new(MockBot::new());
    let endpoint = "https://bot.example.com/webhook".to_string();
    let addr = spawn_server(bot.clone(), Some(endpoint.clone())).await;

    let resp = reqwest::get(format!("http://{}/set_webhook", addr)).await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "Webhook set: true");
    assert_eq!(bot.webhooks(), vec![endpoint]);
}

/// **Test: `/set_webhook` without a configured URL fails with 500 and registers nothing.**
#[tokio::test]
async fn test_set_webhook_without_url() {
    let bot = Arc::new(MockBot::new());
    let addr = spawn_server(bot.clone(), None).await;

    let resp = reqwest::get(format!("http://{}/set_webhook", addr)).await.unwrap();

    assert_eq!(resp.status(), 500);
    assert!(bot.webhooks().is_empty());
}

/// **Test: Registration failure is reported as 500.**
#[tokio::test]
async fn test_set_webhook_failure() {
    let addr = spawn_server(
        Arc::new(MockBot::failing()),
        Some("https://bot.example.com/webhook".to_string()),
    )
    .await;

    let resp = reqwest::get(format!("http://{}/set_webhook", addr)).await.unwrap();

    assert_eq!(resp.status(), 500);
    assert!(resp.text().await.unwrap().contains("mock webhook failure"));
}
