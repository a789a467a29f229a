use axum::http::StatusCode;
use serde_json::json;

use clausewise::application::ports::{CompletionClient, CompletionError};
use clausewise::application::services::RiskPromptBuilder;
use clausewise::infrastructure::llm::GeminiCompletionClient;

use super::stub_server::spawn_stub;

fn client_for(base_url: &str) -> GeminiCompletionClient {
    GeminiCompletionClient::new(
        reqwest::Client::new(),
        Some(&format!("{base_url}/v1beta")),
        "gemini-test-key",
        "gemini-2.0-flash-lite",
        8192,
    )
}

#[tokio::test]
async fn given_candidate_parts_when_completing_then_joins_part_text() {
    let stub = spawn_stub(
        StatusCode::OK,
        json!({"candidates": [{"content": {"parts": [{"text": "{\"summary\":"}, {"text": " \"s\"}"}]}}]}),
    )
    .await;

    let result = client_for(&stub.base_url)
        .complete(&RiskPromptBuilder::build("contract"))
        .await
        .unwrap();

    assert_eq!(result, "{\"summary\": \"s\"}");
}

#[tokio::test]
async fn given_risk_request_when_completing_then_sends_generate_content_request() {
    let stub = spawn_stub(
        StatusCode::OK,
        json!({"candidates": [{"content": {"parts": [{"text": "{}"}]}}]}),
    )
    .await;
    let request = RiskPromptBuilder::build("contract");

    client_for(&stub.base_url).complete(&request).await.unwrap();

    let captured = &stub.requests()[0];
    assert_eq!(
        captured.path,
        "/v1beta/models/gemini-2.0-flash-lite:generateContent"
    );
    assert_eq!(captured.api_key.as_deref(), Some("gemini-test-key"));
    assert_eq!(
        captured.body["systemInstruction"]["parts"][0]["text"],
        request.system_instruction.as_str()
    );
    assert_eq!(captured.body["contents"][0]["role"], "user");
    assert_eq!(
        captured.body["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert_eq!(captured.body["generationConfig"]["temperature"], 0.0);
    assert_eq!(captured.body["generationConfig"]["maxOutputTokens"], 8192);
}

#[tokio::test]
async fn given_no_candidates_when_completing_then_returns_invalid_response() {
    let stub = spawn_stub(StatusCode::OK, json!({"candidates": []})).await;

    let result = client_for(&stub.base_url)
        .complete(&RiskPromptBuilder::build("contract"))
        .await;

    assert!(matches!(result, Err(CompletionError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_rate_limit_when_completing_then_returns_rate_limited() {
    let stub = spawn_stub(StatusCode::TOO_MANY_REQUESTS, json!({})).await;

    let result = client_for(&stub.base_url)
        .complete(&RiskPromptBuilder::build("contract"))
        .await;

    assert!(matches!(result, Err(CompletionError::RateLimited)));
}
