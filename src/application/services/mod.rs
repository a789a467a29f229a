mod analysis_service;
mod document_text_assembler;
mod page_text_extractor;
mod response_sanitizer;
mod response_validator;
mod risk_prompt_builder;

pub use analysis_service::{AnalysisError, AnalysisService, AnalysisStage};
pub use document_text_assembler::{DEFAULT_MAX_CONCURRENT_PAGES, DocumentTextAssembler};
pub use page_text_extractor::{DEFAULT_RENDER_DPI, PageTextExtractor};
pub use response_sanitizer::{SanitizeError, sanitize_response};
pub use response_validator::{ValidationError, validate_response};
pub use risk_prompt_builder::{ANALYSIS_TEMPERATURE, RiskPromptBuilder, SYSTEM_INSTRUCTION};
