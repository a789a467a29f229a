use std::sync::LazyLock;

use regex::Regex;

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?i:json)\s*(?P<body>.*?)```").unwrap());

#[derive(Debug, thiserror::Error)]
pub enum SanitizeError {
    #[error("completion returned an empty response")]
    EmptyResponse,
}

/// Returns the interior of the first ```json fenced block, tag matched in any
/// case, or the trimmed input when no such block exists. Broken JSON is left for the validator to reject.
pub fn sanitize_response(raw: &str) -> Result<&str, SanitizeError> {
    let candidate = match JSON_FENCE.captures(raw).and_then(|c| c.name("body")) {
        Some(body) => body.as_str().trim(),
        None => raw.trim(),
    };

    if candidate.is_empty() {
        return Err(SanitizeError::EmptyResponse);
    }

    Ok(candidate)
}
