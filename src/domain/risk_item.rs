use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub const MAX_EXCERPT_CHARS: usize = 200;

/// Placeholder the model is told to use when a clause cannot be assessed.
pub const ANALYSIS_UNAVAILABLE: &str = "분석 불가";

/// Severity of a flagged clause. Variant order is presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            other => Err(format!(
                "invalid risk level: {other}. Expected: HIGH, MEDIUM, or LOW"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskItem {
    #[serde(rename = "type")]
    pub clause_type: String,
    pub risk_level: RiskLevel,
    pub excerpt: String,
    pub reason: String,
    pub suggested_fix: String,
}

impl RiskItem {
    /// Builds an item, cutting the excerpt down to [`MAX_EXCERPT_CHARS`] and
    /// substituting [`ANALYSIS_UNAVAILABLE`] for a blank reason or fix.
    pub fn new(
        clause_type: String,
        risk_level: RiskLevel,
        excerpt: String,
        reason: String,
        suggested_fix: String,
    ) -> Self {
        Self {
            clause_type,
            risk_level,
            excerpt: truncate_chars(&excerpt, MAX_EXCERPT_CHARS),
            reason: non_blank_or_unavailable(reason),
            suggested_fix: non_blank_or_unavailable(suggested_fix),
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

fn non_blank_or_unavailable(text: String) -> String {
    if text.trim().is_empty() {
        ANALYSIS_UNAVAILABLE.to_string()
    } else {
        text
    }
}
