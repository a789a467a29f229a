use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    CompletionClient, CompletionError, DocumentOpener, ExtractionError, ScratchStore,
};
use crate::domain::{ContractAnalysis, DocumentText, FileKind};

use super::document_text_assembler::DocumentTextAssembler;
use super::response_sanitizer::{SanitizeError, sanitize_response};
use super::response_validator::{ValidationError, validate_response};
use super::risk_prompt_builder::RiskPromptBuilder;

/// End-to-end pipeline: scratch staging, page extraction, prompting,
/// completion, sanitizing and validation. Any stage failure aborts the rest.
pub struct AnalysisService<C>
where
    C: CompletionClient + ?Sized,
{
    scratch_store: Arc<dyn ScratchStore>,
    document_opener: Arc<dyn DocumentOpener>,
    assembler: DocumentTextAssembler,
    completion_client: Arc<C>,
    completion_timeout: Duration,
}

impl<C> AnalysisService<C>
where
    C: CompletionClient + ?Sized,
{
    pub fn new(
        scratch_store: Arc<dyn ScratchStore>,
        document_opener: Arc<dyn DocumentOpener>,
        assembler: DocumentTextAssembler,
        completion_client: Arc<C>,
        completion_timeout: Duration,
    ) -> Self {
        Self {
            scratch_store,
            document_opener,
            assembler,
            completion_client,
            completion_timeout,
        }
    }

    /// Recovers the text of an uploaded document. The extension is checked
    /// before anything touches the scratch directory.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn extract_text(
        &self,
        filename: &str,
        data: &[u8],
    ) -> Result<DocumentText, AnalysisError> {
        let kind = FileKind::from_filename(filename)
            .ok_or_else(|| AnalysisError::UnsupportedFileType(filename.to_string()))?;

        let scratch_file = self
            .scratch_store
            .stage(filename, data)
            .await
            .map_err(|e| AnalysisError::Extraction(ExtractionError::Staging(e.to_string())))?;

        let source = self
            .document_opener
            .open(scratch_file.path(), kind)
            .await
            .map_err(AnalysisError::Extraction)?;

        let text = self.assembler.assemble(source).await;
        drop(scratch_file);

        Ok(text)
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn analyze_text(&self, text: &str) -> Result<ContractAnalysis, AnalysisError> {
        let request = RiskPromptBuilder::build(text);

        let raw = tokio::time::timeout(
            self.completion_timeout,
            self.completion_client.complete(&request),
        )
        .await
        .map_err(|_| AnalysisError::Cancelled(self.completion_timeout))?
        .map_err(AnalysisError::Completion)?;

        tracing::debug!(raw_chars = raw.len(), "Completion received");

        let json_text = sanitize_response(&raw)?;
        let analysis = validate_response(json_text)?;

        tracing::info!(
            risk_items = analysis.risk_items().len(),
            forms = analysis.forms().len(),
            "Contract analysis complete"
        );

        Ok(analysis)
    }

    /// Full pipeline from uploaded bytes. The scratch copy is released before
    /// the completion call starts.
    pub async fn analyze(
        &self,
        filename: &str,
        data: &[u8],
    ) -> Result<ContractAnalysis, AnalysisError> {
        let text = self.extract_text(filename, data).await?;
        self.analyze_text(&text.render()).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    Upload,
    Extraction,
    Completion,
    Sanitize,
    Validation,
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Upload => "upload",
            Self::Extraction => "extraction",
            Self::Completion => "completion",
            Self::Sanitize => "sanitize",
            Self::Validation => "validation",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("extraction: {0}")]
    Extraction(#[source] ExtractionError),
    #[error("completion: {0}")]
    Completion(#[source] CompletionError),
    #[error("sanitize: {0}")]
    Sanitize(#[from] SanitizeError),
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("completion cancelled after {0:?}")]
    Cancelled(Duration),
}

impl AnalysisError {
    pub fn stage(&self) -> AnalysisStage {
        match self {
            Self::UnsupportedFileType(_) => AnalysisStage::Upload,
            Self::Extraction(_) => AnalysisStage::Extraction,
            Self::Completion(_) | Self::Cancelled(_) => AnalysisStage::Completion,
            Self::Sanitize(_) => AnalysisStage::Sanitize,
            Self::Validation(_) => AnalysisStage::Validation,
        }
    }
}
