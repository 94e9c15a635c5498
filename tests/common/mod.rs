#![allow(dead_code)]

use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sentiment_analyzer::config::Settings;
use sentiment_analyzer::{AppState, build_router};

/// Credential that passes the surface shape check. Never a real key.
pub const TEST_API_KEY: &str = "sk-test-00000000000000000000";

/// Spawn the app on an ephemeral port, pointed at a fresh mock platform that
/// stands in for both the completion and moderation endpoints.
pub async fn spawn_app(moderation_enabled: bool) -> (String, MockServer) {
    let platform = MockServer::start().await;

    let mut settings = Settings::from_env();
    settings.openai_api_base = platform.uri();
    settings.openai_model = "gpt-3.5-turbo".to_string();
    settings.moderation_enabled = moderation_enabled;

    let state = Arc::new(AppState::new(settings));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    (format!("http://{addr}"), platform)
}

/// Build a reusable HTTP client.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("Failed to build HTTP client")
}

/// Chat-completion response carrying `content` as the only candidate.
pub fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 20, "completion_tokens": 10, "total_tokens": 30 }
    })
}

/// Moderation response body with the category flags serialized in the given
/// order. Written by hand because entry order is exactly what the gate
/// consumes and `serde_json::json!` would re-sort the keys.
pub fn moderation_body(flagged: bool, categories: &[(&str, bool)]) -> String {
    let flags = categories
        .iter()
        .map(|(name, hit)| format!("\"{name}\": {hit}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"{{"id": "modr-test", "model": "omni-moderation-latest", "results": [{{"flagged": {flagged}, "categories": {{{flags}}}, "category_scores": {{}}}}]}}"#
    )
}

pub async fn stub_completion(platform: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(platform)
        .await;
}

pub async fn stub_moderation(platform: &MockServer, flagged: bool, categories: &[(&str, bool)]) {
    Mock::given(method("POST"))
        .and(path("/moderations"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(moderation_body(flagged, categories), "application/json"),
        )
        .mount(platform)
        .await;
}

pub async fn post_analyze(
    client: &reqwest::Client,
    base: &str,
    api_key: &str,
    text: &str,
) -> reqwest::Response {
    client
        .post(format!("{base}/api/v1/analyze"))
        .json(&serde_json::json!({ "api_key": api_key, "text": text }))
        .send()
        .await
        .expect("analyze request failed")
}

/// Bodies of every request the platform received on `route`, parsed as JSON.
pub async fn received_bodies(platform: &MockServer, route: &str) -> Vec<serde_json::Value> {
    platform
        .received_requests()
        .await
        .expect("mock server should be recording")
        .into_iter()
        .filter(|r| r.url.path() == route)
        .map(|r| r.body_json().expect("request body should be JSON"))
        .collect()
}
