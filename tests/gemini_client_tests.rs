use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use pathfinder_relay::services::gemini::GeminiClient;
use pathfinder_relay::services::provider::{CompletionProvider, ProviderError};
use serde_json::{Value, json};

// Stand-in for the Gemini API: the model segment picks the behaviour.
async fn fake_generate(
    Path(model_action): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("test-key") {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": { "code": 403, "message": "API key not valid" } })),
        )
            .into_response();
    }

    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default().to_string();

    match model_action.as_str() {
        "echo:generateContent" => Json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "you said: " }, { "text": prompt }] },
                "finishReason": "STOP"
            }]
        }))
        .into_response(),
        "busy:generateContent" => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": { "code": 429, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED" } })),
        )
            .into_response(),
        "garbled:generateContent" => "<html>not json</html>".into_response(),
        "slow:generateContent" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "candidates": [] })).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn spawn_fake_gemini() -> SocketAddr {
    let app = Router::new().route("/v1beta/models/{model_action}", post(fake_generate));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr, key: &str, model: &str, timeout: Option<Duration>) -> GeminiClient {
    GeminiClient::new(key, model, &format!("http://{addr}"), timeout).unwrap()
}

#[tokio::test]
async fn test_successful_completion() {
    let addr = spawn_fake_gemini().await;
    let gemini = client(addr, "test-key", "echo", None);

    let text = gemini.complete("hello").await.unwrap();
    assert_eq!(text, "you said: hello");
}

#[tokio::test]
async fn test_bad_key_is_auth_error() {
    let addr = spawn_fake_gemini().await;
    let gemini = client(addr, "wrong", "echo", None);

    let err = gemini.complete("hello").await.unwrap_err();
    assert_eq!(err, ProviderError::Auth("API key not valid".into()));
}

#[tokio::test]
async fn test_rate_limit_is_quota_error() {
    let addr = spawn_fake_gemini().await;
    let gemini = client(addr, "test-key", "busy", None);

    let err = gemini.complete("hello").await.unwrap_err();
    assert_eq!(err.to_string(), "quota exceeded");
    assert_eq!(err.kind(), "quota");
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let addr = spawn_fake_gemini().await;
    let gemini = client(addr, "test-key", "garbled", None);

    let err = gemini.complete("hello").await.unwrap_err();
    assert_eq!(err.kind(), "malformed_response");
}

#[tokio::test]
async fn test_unknown_model_is_upstream_error() {
    let addr = spawn_fake_gemini().await;
    let gemini = client(addr, "test-key", "nope", None);

    let err = gemini.complete("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::Upstream { status: 404, .. }));
}

#[tokio::test]
async fn test_configured_timeout_is_timeout_error() {
    let addr = spawn_fake_gemini().await;
    let gemini = client(addr, "test-key", "slow", Some(Duration::from_millis(200)));

    let err = gemini.complete("hello").await.unwrap_err();
    assert_eq!(err.kind(), "timeout");
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gemini = client(addr, "test-key", "echo", None);
    let err = gemini.complete("hello").await.unwrap_err();
    assert_eq!(err.kind(), "network");
}
