use clausewise::application::services::{SanitizeError, sanitize_response};

#[test]
fn given_fenced_json_when_sanitizing_then_returns_interior() {
    let raw = "```json\n{\"summary\": \"s\"}\n```";
    assert_eq!(sanitize_response(raw).unwrap(), "{\"summary\": \"s\"}");
}

#[test]
fn given_commentary_around_fence_when_sanitizing_then_returns_only_fenced_block() {
    let raw = "Here is the analysis:\n```json\n{\"a\": 1}\n```\nLet me know if you need more.";
    assert_eq!(sanitize_response(raw).unwrap(), "{\"a\": 1}");
}

#[test]
fn given_unfenced_json_when_sanitizing_then_returns_trimmed_input() {
    let raw = "  \n{\"a\": 1}\n ";
    assert_eq!(sanitize_response(raw).unwrap(), "{\"a\": 1}");
}

#[test]
fn given_fenced_and_unfenced_forms_when_parsing_then_yield_same_value() {
    let interior = r#"{"summary": "요약", "riskItems": []}"#;
    let fenced = format!("```json\n{interior}\n```");

    let from_fenced: serde_json::Value =
        serde_json::from_str(sanitize_response(&fenced).unwrap()).unwrap();
    let from_plain: serde_json::Value = serde_json::from_str(interior).unwrap();

    assert_eq!(from_fenced, from_plain);
}

#[test]
fn given_broken_json_when_sanitizing_then_leaves_it_unrepaired() {
    let raw = "{\"summary\": ";
    assert_eq!(sanitize_response(raw).unwrap(), "{\"summary\":");
}

#[test]
fn given_blank_response_when_sanitizing_then_returns_empty_response_error() {
    assert!(matches!(
        sanitize_response("   \n"),
        Err(SanitizeError::EmptyResponse)
    ));
}

#[test]
fn given_empty_fenced_block_when_sanitizing_then_returns_empty_response_error() {
    assert!(matches!(
        sanitize_response("```json\n```"),
        Err(SanitizeError::EmptyResponse)
    ));
}

#[test]
fn given_uppercase_json_tag_when_sanitizing_then_returns_interior() {
    let raw = "Here you go:\n```JSON\n{\"a\":1}\n```";
    assert_eq!(sanitize_response(raw).unwrap(), "{\"a\":1}");
}
