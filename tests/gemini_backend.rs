//! Integration tests for the Gemini backend over a loopback socket

mod common;

use aurora::ai::{APOLOGY_REPLY, ChatError, GeminiBackend, LlmBackend, NO_TEXT_REPLY, ResponseGateway};
use aurora::config::GeminiConfig;
use aurora::types::ChatMessage;
use common::{direct_client, serve_once};

fn backend(endpoint: &str, api_key: Option<&str>) -> GeminiBackend {
    GeminiBackend::with_client(
        GeminiConfig {
            api_key: api_key.map(str::to_string),
            model: "gemini-test".into(),
            endpoint: endpoint.into(),
        },
        direct_client(),
    )
}

#[tokio::test]
async fn test_reply_text_is_returned() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello from Gemini"}]}}]}"#,
    )
    .await;
    let gateway = ResponseGateway::new(backend(&url, Some("test-key")));
    let history = [ChatMessage::user("Hi"), ChatMessage::model("Hello!")];

    let reply = gateway.respond("Tell me more", &history).await.unwrap();
    assert_eq!(reply, "Hello from Gemini");

    let request = server.await.unwrap();
    assert!(
        request.starts_with("POST /v1beta/models/gemini-test:generateContent HTTP/1.1"),
        "unexpected request line: {request}"
    );
    assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));

    let body = request.split("\r\n\r\n").nth(1).unwrap();
    let payload: serde_json::Value = serde_json::from_str(body).unwrap();
    let contents = payload["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 4);
    assert_eq!(contents[2]["role"], "model");
    assert_eq!(contents[3]["parts"][0]["text"], "Tell me more");
    assert_eq!(payload["generationConfig"]["topK"], 40);
    assert_eq!(payload["generationConfig"]["maxOutputTokens"], 1000);
}

#[tokio::test]
async fn test_server_error_becomes_apology() {
    let (url, server) = serve_once(
        "500 Internal Server Error",
        r#"{"error":{"code":500,"message":"boom"}}"#,
    )
    .await;
    let gateway = ResponseGateway::new(backend(&url, Some("test-key")));

    let reply = gateway.respond("Hi", &[]).await.unwrap();

    assert_eq!(reply, APOLOGY_REPLY);
    server.await.unwrap();
}

#[tokio::test]
async fn test_service_error_keeps_status() {
    let (url, server) = serve_once("403 Forbidden", r#"{"error":"denied"}"#).await;
    let backend = backend(&url, Some("bad-key"));
    let request = aurora::ai::build_request("persona", &[], "Hi");

    let err = backend.generate(&request).await.unwrap_err();

    assert!(matches!(err, ChatError::Service { status: 403, .. }));
    server.await.unwrap();
}

#[tokio::test]
async fn test_empty_response_uses_fallback() {
    let (url, server) = serve_once("200 OK", "{}").await;
    let gateway = ResponseGateway::new(backend(&url, Some("test-key")));

    let reply = gateway.respond("Hi", &[]).await.unwrap();

    assert_eq!(reply, NO_TEXT_REPLY);
    server.await.unwrap();
}

#[tokio::test]
async fn test_garbled_response_becomes_apology() {
    let (url, server) = serve_once("200 OK", "not json").await;
    let gateway = ResponseGateway::new(backend(&url, Some("test-key")));

    let reply = gateway.respond("Hi", &[]).await.unwrap();

    assert_eq!(reply, APOLOGY_REPLY);
    server.await.unwrap();
}

#[tokio::test]
async fn test_missing_key_fails_without_network() {
    let backend = backend("http://127.0.0.1:9", None);
    assert!(!backend.is_configured());

    let gateway = ResponseGateway::new(backend);
    let err = gateway.respond("Hi", &[]).await.unwrap_err();

    assert!(matches!(err, ChatError::MissingApiKey));
}
