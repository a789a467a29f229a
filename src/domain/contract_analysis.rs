use serde::Serialize;

use super::form_suggestion::FormSuggestion;
use super::risk_item::RiskItem;

pub const MIN_SUMMARY_CHARS: usize = 500;

/// Final, read-only result of one analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractAnalysis {
    summary: String,
    #[serde(rename = "riskItems")]
    risk_items: Vec<RiskItem>,
    forms: Vec<FormSuggestion>,
}

impl ContractAnalysis {
    /// Risk items are stably ordered HIGH, MEDIUM, LOW regardless of input order.
    pub fn new(summary: String, mut risk_items: Vec<RiskItem>, forms: Vec<FormSuggestion>) -> Self {
        risk_items.sort_by_key(|item| item.risk_level);
        Self {
            summary,
            risk_items,
            forms,
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn risk_items(&self) -> &[RiskItem] {
        &self.risk_items
    }

    pub fn forms(&self) -> &[FormSuggestion] {
        &self.forms
    }
}
