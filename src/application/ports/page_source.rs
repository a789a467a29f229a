use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{FileKind, Page};

/// An opened document: its pages' embedded text plus on-demand rendering.
#[async_trait]
pub trait PageSource: Send + Sync {
    fn pages(&self) -> &[Page];

    /// Renders the 1-based `page_index` to PNG bytes at `dpi`.
    async fn render(&self, page_index: usize, dpi: u32) -> Result<Vec<u8>, ExtractionError>;
}

#[async_trait]
pub trait DocumentOpener: Send + Sync {
    async fn open(
        &self,
        path: &Path,
        kind: FileKind,
    ) -> Result<Arc<dyn PageSource>, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("failed to open document: {0}")]
    OpenFailed(String),
    #[error("failed to render page {page}: {message}")]
    RenderFailed { page: usize, message: String },
    #[error("scratch storage: {0}")]
    Staging(String),
    #[error("extraction timed out")]
    Timeout,
}
