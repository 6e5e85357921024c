//! Messages API client tests
//!
//! Runs `AnthropicClient` against a mockito server.

use claude_commit::error::AppError;
use claude_commit::llm::{AnthropicClient, InferenceClient};
use claude_commit::test_utils::{ensure_crypto_provider, test_config};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;

fn client_for(server: &Server) -> AnthropicClient {
    ensure_crypto_provider();
    AnthropicClient::with_endpoint(format!("{}/v1/messages", server.url())).unwrap()
}

#[tokio::test]
async fn test_generate_success_sends_expected_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .match_header("x-api-key", "sk-test-key")
        .match_header("anthropic-version", "2023-06-01")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "model": "claude-3-5-haiku-latest",
            "messages": [{"role": "user", "content": "test prompt"}],
            "max_tokens": 100
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"content":[{"type":"text","text":"feat: add new feature"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let text = client
        .generate(
            &test_config("sk-test-key", "claude-3-5-haiku-latest"),
            "test prompt",
        )
        .await
        .unwrap();

    assert_eq!(text, "feat: add new feature");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_returns_first_segment_unmodified() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_body(r#"{"content":[{"text":"  fix: first \n"},{"text":"second"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let text = client
        .generate(&test_config("sk-test-key", "m"), "p")
        .await
        .unwrap();

    assert_eq!(text, "  fix: first \n");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_401_is_remote_error_with_raw_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .with_status(401)
        .with_body(r#"{"error":"unauthorized"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .generate(&test_config("sk-bad-key", "m"), "p")
        .await
        .unwrap_err();

    match &err {
        AppError::RemoteApi { status, body } => {
            assert_eq!(*status, 401);
            assert_eq!(body, r#"{"error":"unauthorized"}"#);
        }
        other => panic!("Expected RemoteApi error, got {:?}", other),
    }
    assert!(err.to_string().contains("API error"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_500_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .with_status(500)
        .with_body("internal error")
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .generate(&test_config("sk-test-key", "m"), "p")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::RemoteApi { status: 500, .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_empty_content_is_empty_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_body(r#"{"content":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .generate(&test_config("sk-test-key", "m"), "p")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::EmptyResponse));
    assert_eq!(err.to_string(), "empty response from API");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_invalid_json_is_parse_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_body("invalid json")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .generate(&test_config("sk-test-key", "m"), "p")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Parse { .. }));
    assert!(err.to_string().contains("error parsing API response"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_connection_failure_is_transport_error() {
    ensure_crypto_provider();
    // Nothing listens on port 1
    let client = AnthropicClient::with_endpoint("http://127.0.0.1:1/v1/messages").unwrap();

    let err = client
        .generate(&test_config("sk-test-key", "m"), "p")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Transport(_)));
    assert!(err.to_string().contains("error making API call"));
}
