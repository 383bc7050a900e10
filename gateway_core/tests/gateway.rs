//! Integration tests for the gateway client against a mock backend.

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::json;

use gateway_core::{GatewayClient, CHAT_PATH, GENERATE_PATH};

/// Serve `app` on an ephemeral port and return a base URL for it.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn chat_returns_reply_text() {
    async fn chat(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
        let message = body["message"].as_str().unwrap_or_default().to_string();
        Json(json!({ "session_id": "s-1", "reply": format!("echo: {message}") }))
    }

    let base = serve(Router::new().route(CHAT_PATH, post(chat))).await;
    let reply = GatewayClient::new(&base).chat("hello there").await.unwrap();

    assert_eq!(reply.reply, "echo: hello there");
    assert_eq!(reply.session_id.as_deref(), Some("s-1"));
}

#[tokio::test]
async fn chat_error_status_becomes_an_error() {
    async fn chat() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "boom")
    }

    let base = serve(Router::new().route(CHAT_PATH, post(chat))).await;
    let result = GatewayClient::new(&base).chat("hello").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn chat_unreachable_backend_is_an_error() {
    // Nothing listens here.
    let result = GatewayClient::new("http://127.0.0.1:1").chat("hello").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn analyse_with_image_returns_reply_text() {
    async fn analyse() -> Json<serde_json::Value> {
        Json(json!({ "reply": "The scene shows a beach." }))
    }

    let base = serve(Router::new().route(CHAT_PATH, post(analyse))).await;
    let reply = GatewayClient::new(&base)
        .analyse_with_image("describe this", "new", "new.jpg", vec![0xFF, 0xD8, 0xFF])
        .await
        .unwrap();

    assert_eq!(reply.reply, "The scene shows a beach.");
    assert!(reply.session_id.is_none());
}

#[tokio::test]
async fn generate_skybox_succeeds_on_ok_status() {
    async fn generate(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
        assert!(body["prompt"].is_string());
        Json(json!({ "status": "queued" }))
    }

    let base = serve(Router::new().route(GENERATE_PATH, post(generate))).await;
    GatewayClient::new(&base)
        .generate_skybox("a quiet mountain lake at dawn")
        .await
        .unwrap();
}

#[tokio::test]
async fn generate_skybox_propagates_error_status() {
    async fn generate() -> StatusCode {
        StatusCode::BAD_GATEWAY
    }

    let base = serve(Router::new().route(GENERATE_PATH, post(generate))).await;
    let result = GatewayClient::new(&base).generate_skybox("prompt").await;

    assert!(result.is_err());
}
