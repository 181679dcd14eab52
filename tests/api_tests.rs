mod common;

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use summarizer::ai::FallbackChain;
use summarizer::api::router;
use summarizer::api::handler::LIVENESS_MESSAGE;
use summarizer::core::models::{EXHAUSTED_SUMMARY_TEXT, NO_MODEL_LABEL};
use tower::ServiceExt;

use common::{Behavior, ScriptedAdapter, chain, step};

async fn send(chain: Arc<FallbackChain>, request: Request<Body>) -> (StatusCode, Value) {
    let response = router(chain).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn summarize_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/summarize")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn working_chain() -> Arc<FallbackChain> {
    let adapter = Arc::new(ScriptedAdapter::new(
        "gemini",
        Behavior::Succeed("Foxes jump. Word Count: 2 words"),
    ));
    chain(vec![step(&adapter, &["gemini-key-1234567890"])])
}

#[tokio::test]
async fn test_root_reports_liveness() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let (status, body) = send(working_chain(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": LIVENESS_MESSAGE }));
}

#[tokio::test]
async fn test_summarize_returns_summary_and_char_lengths() {
    let text = "Les élèves étudient à l'école.";
    let payload = json!({ "text": text, "max_length": 60, "min_length": 10 }).to_string();

    let (status, body) = send(working_chain(), summarize_request(&payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary_text"], "Foxes jump. Word Count: 2 words");
    assert_eq!(body["model_used"], "gemini (gemini-flash)");
    assert_eq!(body["original_length"], text.chars().count());
    assert_eq!(
        body["summary_length"],
        "Foxes jump. Word Count: 2 words".chars().count()
    );
}

#[tokio::test]
async fn test_summarize_uses_default_lengths_when_omitted() {
    let (status, body) =
        send(working_chain(), summarize_request(r#"{"text": "Short input."}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_length"], 12);
}

#[tokio::test]
async fn test_summarize_rejects_missing_or_empty_text() {
    for payload in [r#"{"text": ""}"#, r#"{"max_length": 100}"#] {
        let adapter = Arc::new(ScriptedAdapter::new("gemini", Behavior::Succeed("unused")));
        let chain = chain(vec![step(&adapter, &["gemini-key-1234567890"])]);

        let (status, body) = send(chain, summarize_request(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body, json!({ "detail": "Text is required" }));
        assert_eq!(adapter.generate_count(), 0, "no provider call for {payload}");
    }
}

#[tokio::test]
async fn test_summarize_accepts_whitespace_only_text() {
    let adapter = Arc::new(ScriptedAdapter::new("gemini", Behavior::Succeed("Nothing to summarize.")));
    let chain = chain(vec![step(&adapter, &["gemini-key-1234567890"])]);

    let (status, body) = send(chain, summarize_request(r#"{"text": "   "}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_length"], 3);
    assert_eq!(body["summary_text"], "Nothing to summarize.");
    assert_eq!(adapter.generate_count(), 1);
}

#[tokio::test]
async fn test_summarize_accepts_out_of_range_lengths() {
    for payload in [
        r#"{"text": "hello", "max_length": -1}"#,
        r#"{"text": "hello", "max_length": 5000000000, "min_length": -20}"#,
    ] {
        let (status, body) = send(working_chain(), summarize_request(payload)).await;

        assert_eq!(status, StatusCode::OK, "payload: {payload}");
        assert_eq!(body["original_length"], 5);
        assert_eq!(body["summary_text"], "Foxes jump. Word Count: 2 words");
    }
}

#[tokio::test]
async fn test_summarize_rejects_malformed_json() {
    let (status, body) = send(working_chain(), summarize_request("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_summarize_falls_back_to_next_provider() {
    let first = Arc::new(ScriptedAdapter::new("gemini", Behavior::Fail("quota exceeded")));
    let second = Arc::new(ScriptedAdapter::new("openai", Behavior::Succeed("Backup summary.")));
    let chain = chain(vec![
        step(&first, &["gemini-key-1234567890"]),
        step(&second, &["sk-openai-1234567890"]),
    ]);

    let (status, body) = send(chain, summarize_request(r#"{"text": "Some article."}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary_text"], "Backup summary.");
    assert_eq!(body["model_used"], "openai (openai-flash)");
    assert_eq!(first.generate_count(), 1);
}

#[tokio::test]
async fn test_total_failure_is_reported_in_body_not_status() {
    let first = Arc::new(ScriptedAdapter::new("gemini", Behavior::Fail("invalid key")));
    let second = Arc::new(ScriptedAdapter::new("openai", Behavior::Fail("quota exceeded")));
    let chain = chain(vec![
        step(&first, &["gemini-key-1234567890"]),
        step(&second, &["sk-openai-1234567890"]),
    ]);
    let text = "An article nobody can summarize.";
    let payload = json!({ "text": text }).to_string();

    let (status, body) = send(chain, summarize_request(&payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary_text"], EXHAUSTED_SUMMARY_TEXT);
    assert_eq!(body["model_used"], NO_MODEL_LABEL);
    assert_eq!(body["original_length"], text.chars().count());
    assert_eq!(body["summary_length"], EXHAUSTED_SUMMARY_TEXT.chars().count());
}

#[tokio::test]
async fn test_unconfigured_chain_still_answers() {
    let adapter = Arc::new(ScriptedAdapter::new("gemini", Behavior::Succeed("unused")));
    let chain = chain(vec![step(&adapter, &["YOUR_API_KEY_HERE"])]);

    let (status, body) = send(chain, summarize_request(r#"{"text": "Hello there."}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model_used"], NO_MODEL_LABEL);
    assert_eq!(adapter.generate_count(), 0);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/missing")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(working_chain(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
