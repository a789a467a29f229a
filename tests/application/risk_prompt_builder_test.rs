use clausewise::application::ports::ResponseFormat;
use clausewise::application::services::{RiskPromptBuilder, SYSTEM_INSTRUCTION};
use clausewise::domain::ANALYSIS_UNAVAILABLE;

const CONTRACT: &str = "--- Page 1 (embedded) ---\n제1조 (목적) 본 계약은...\n";

#[test]
fn given_same_text_when_building_twice_then_requests_are_identical() {
    assert_eq!(RiskPromptBuilder::build(CONTRACT), RiskPromptBuilder::build(CONTRACT));
}

#[test]
fn given_document_text_when_building_then_requests_deterministic_json() {
    let request = RiskPromptBuilder::build(CONTRACT);

    assert_eq!(request.system_instruction, SYSTEM_INSTRUCTION);
    assert_eq!(request.temperature, 0.0);
    assert_eq!(request.response_format, ResponseFormat::Json);
}

#[test]
fn given_document_text_when_building_then_prompt_embeds_document() {
    let request = RiskPromptBuilder::build(CONTRACT);
    assert!(request.user_prompt.contains("제1조 (목적) 본 계약은..."));
}

#[test]
fn given_document_text_when_building_then_prompt_states_schema_and_rules() {
    let prompt = RiskPromptBuilder::build(CONTRACT).user_prompt;

    for required in [
        "summary",
        "riskItems",
        "forms",
        "downloadUrl",
        "suggested_fix",
        "HIGH",
        "MEDIUM",
        "LOW",
        "500",
        "200",
        ANALYSIS_UNAVAILABLE,
    ] {
        assert!(prompt.contains(required), "prompt is missing {required}");
    }
}

#[test]
fn given_empty_text_when_building_then_still_produces_instructions() {
    let request = RiskPromptBuilder::build("");
    assert!(request.user_prompt.contains("riskItems"));
}
