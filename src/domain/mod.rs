mod contract_analysis;
mod document_text;
mod file_kind;
mod form_suggestion;
mod page;
mod risk_item;
mod scratch_path;

pub use contract_analysis::{ContractAnalysis, MIN_SUMMARY_CHARS};
pub use document_text::DocumentText;
pub use file_kind::FileKind;
pub use form_suggestion::FormSuggestion;
pub use page::{ExtractionMethod, Page, PageText};
pub use risk_item::{ANALYSIS_UNAVAILABLE, MAX_EXCERPT_CHARS, RiskItem, RiskLevel};
pub use scratch_path::ScratchPath;
