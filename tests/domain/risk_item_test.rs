use clausewise::domain::{ANALYSIS_UNAVAILABLE, MAX_EXCERPT_CHARS, RiskItem, RiskLevel};

fn item(excerpt: &str, reason: &str, fix: &str) -> RiskItem {
    RiskItem::new(
        "위약금".to_string(),
        RiskLevel::High,
        excerpt.to_string(),
        reason.to_string(),
        fix.to_string(),
    )
}

#[test]
fn given_levels_when_sorting_then_high_precedes_medium_precedes_low() {
    let mut levels = vec![RiskLevel::Low, RiskLevel::High, RiskLevel::Medium];
    levels.sort();
    assert_eq!(levels, vec![RiskLevel::High, RiskLevel::Medium, RiskLevel::Low]);
}

#[test]
fn given_mixed_case_level_when_parsing_then_accepts_it() {
    assert_eq!("high".parse::<RiskLevel>(), Ok(RiskLevel::High));
    assert_eq!(" Medium ".parse::<RiskLevel>(), Ok(RiskLevel::Medium));
    assert_eq!("LOW".parse::<RiskLevel>(), Ok(RiskLevel::Low));
}

#[test]
fn given_unknown_level_when_parsing_then_returns_error() {
    let result = "CRITICAL".parse::<RiskLevel>();
    assert!(result.unwrap_err().contains("CRITICAL"));
}

#[test]
fn given_long_korean_excerpt_when_creating_item_then_truncates_by_characters() {
    let excerpt = "가".repeat(MAX_EXCERPT_CHARS + 50);
    let risk = item(&excerpt, "사유", "수정안");
    assert_eq!(risk.excerpt.chars().count(), MAX_EXCERPT_CHARS);
}

#[test]
fn given_short_excerpt_when_creating_item_then_keeps_it_unchanged() {
    let risk = item("제5조 손해배상", "사유", "수정안");
    assert_eq!(risk.excerpt, "제5조 손해배상");
}

#[test]
fn given_blank_reason_and_fix_when_creating_item_then_uses_unavailable_marker() {
    let risk = item("제5조", "  ", "");
    assert_eq!(risk.reason, ANALYSIS_UNAVAILABLE);
    assert_eq!(risk.suggested_fix, ANALYSIS_UNAVAILABLE);
}

#[test]
fn given_item_when_serializing_then_uses_wire_field_names() {
    let risk = item("제5조", "사유", "수정안");
    let json = serde_json::to_value(&risk).unwrap();
    assert_eq!(json["type"], "위약금");
    assert_eq!(json["risk_level"], "HIGH");
    assert_eq!(json["suggested_fix"], "수정안");
}
