use std::collections::HashSet;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{
    ANALYSIS_UNAVAILABLE, ContractAnalysis, FormSuggestion, MIN_SUMMARY_CHARS, RiskItem, RiskLevel,
};

const REQUIRED_KEYS: [&str; 2] = ["summary", "riskItems"];

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("schema violation: {0}")]
    SchemaViolation(String),
}

// Models emit `null` as often as they omit a key, so optional text fields
// accept both.
#[derive(Deserialize)]
struct RawRiskItem {
    #[serde(rename = "type")]
    clause_type: String,
    risk_level: String,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    suggested_fix: Option<String>,
}

#[derive(Deserialize)]
struct RawFormSuggestion {
    #[serde(rename = "type")]
    form_type: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "downloadUrl", default)]
    download_url: Option<String>,
}

/// Parses sanitized model output into a [`ContractAnalysis`].
///
/// Missing `summary` or `riskItems` is a schema violation; a missing `forms`
/// key is read as an empty list. Risk items are re-sorted, excerpts truncated
/// and exact `(type, excerpt)` duplicates dropped rather than rejected.
/// Repeated `reason` text is only reported in the logs.
pub fn validate_response(json_text: &str) -> Result<ContractAnalysis, ValidationError> {
    let value: Value = serde_json::from_str(json_text)
        .map_err(|e| ValidationError::MalformedResponse(e.to_string()))?;

    let Value::Object(mut object) = value else {
        return Err(ValidationError::SchemaViolation(
            "top-level value must be a JSON object".to_string(),
        ));
    };

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| object.get(*key).is_none_or(Value::is_null))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::SchemaViolation(format!(
            "missing required key(s): {}",
            missing.join(", ")
        )));
    }

    let summary = match object.remove("summary") {
        Some(Value::String(summary)) => summary,
        _ => return Err(schema_type_error("summary", "a string")),
    };
    let raw_risk_items = match object.remove("riskItems") {
        Some(Value::Array(items)) => items,
        _ => return Err(schema_type_error("riskItems", "an array")),
    };
    let raw_forms = match object.remove("forms") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(forms)) => forms,
        Some(_) => return Err(schema_type_error("forms", "an array")),
    };

    if summary.trim().is_empty() {
        return Err(ValidationError::SchemaViolation(
            "summary must not be empty".to_string(),
        ));
    }

    let summary_chars = summary.chars().count();
    if summary_chars < MIN_SUMMARY_CHARS {
        tracing::warn!(
            summary_chars,
            minimum = MIN_SUMMARY_CHARS,
            "Summary shorter than requested"
        );
    }

    let risk_items = normalize_risk_items(raw_risk_items)?;

    let forms = raw_forms
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let form: RawFormSuggestion = parse_element("forms", index, value)?;
            Ok(FormSuggestion::new(
                form.form_type,
                form.description.unwrap_or_default(),
                form.download_url.unwrap_or_default(),
            ))
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(ContractAnalysis::new(summary, risk_items, forms))
}

fn schema_type_error(key: &str, expected: &str) -> ValidationError {
    ValidationError::SchemaViolation(format!("{key} must be {expected}"))
}

fn parse_element<T: DeserializeOwned>(
    key: &str,
    index: usize,
    value: Value,
) -> Result<T, ValidationError> {
    serde_json::from_value(value)
        .map_err(|e| ValidationError::SchemaViolation(format!("{key}[{index}]: {e}")))
}

fn normalize_risk_items(raw_items: Vec<Value>) -> Result<Vec<RiskItem>, ValidationError> {
    let mut items = Vec::with_capacity(raw_items.len());

    for (index, value) in raw_items.into_iter().enumerate() {
        let raw: RawRiskItem = parse_element("riskItems", index, value)?;
        let risk_level: RiskLevel = raw.risk_level.parse().map_err(|e| {
            ValidationError::SchemaViolation(format!("riskItems[{index}].risk_level: {e}"))
        })?;

        items.push(RiskItem::new(
            raw.clause_type,
            risk_level,
            raw.excerpt.unwrap_or_default(),
            raw.reason.unwrap_or_default(),
            raw.suggested_fix.unwrap_or_default(),
        ));
    }

    if !items.is_sorted_by_key(|item| item.risk_level) {
        tracing::debug!("Risk items out of order, re-sorting by level");
    }

    // Sort first so that the highest-rated copy of a duplicate is the one kept.
    items.sort_by_key(|item| item.risk_level);

    let before = items.len();
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert((item.clause_type.clone(), item.excerpt.clone())));
    if items.len() < before {
        tracing::warn!(
            dropped = before - items.len(),
            "Dropped duplicate (type, excerpt) risk items"
        );
    }

    let mut reasons = HashSet::new();
    let repeated = items
        .iter()
        .filter(|item| item.reason != ANALYSIS_UNAVAILABLE)
        .filter(|item| !reasons.insert(item.reason.as_str()))
        .count();
    if repeated > 0 {
        tracing::warn!(repeated, "Risk items repeat an identical reason");
    }

    Ok(items)
}
