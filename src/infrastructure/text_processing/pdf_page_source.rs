use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;
use tokio::sync::OnceCell;

use crate::application::ports::{DocumentOpener, ExtractionError, PageSource};
use crate::domain::{FileKind, Page};

use super::pdf_rasterizer::PdfRenderer;
use super::text_sanitizer::sanitize_extracted_text;

const OPEN_TIMEOUT: Duration = Duration::from_secs(30);
const RENDER_TIMEOUT: Duration = Duration::from_secs(60);

/// PDF pages with their embedded text read up front; bitmaps are rendered
/// through pdfium only when a page is asked for one. The renderer is started
/// on the first such request and shared by later pages.
pub struct PdfPageSource {
    data: Arc<Vec<u8>>,
    pages: Vec<Page>,
    renderer: OnceCell<PdfRenderer>,
}

impl PdfPageSource {
    pub async fn open(path: &Path) -> Result<Self, ExtractionError> {
        let path: PathBuf = path.to_path_buf();

        let (data, pages) = tokio::time::timeout(
            OPEN_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::read_pages(&path)),
        )
        .await
        .map_err(|_| ExtractionError::Timeout)?
        .map_err(|e| ExtractionError::OpenFailed(format!("task join error: {e}")))??;

        let with_text = pages.iter().filter(|p| p.embedded_text.is_some()).count();
        tracing::info!(
            page_count = pages.len(),
            pages_with_text = with_text,
            "PDF opened"
        );

        Ok(Self {
            data: Arc::new(data),
            pages,
            renderer: OnceCell::new(),
        })
    }

    fn read_pages(path: &Path) -> Result<(Vec<u8>, Vec<Page>), ExtractionError> {
        let data = std::fs::read(path)
            .map_err(|e| ExtractionError::OpenFailed(format!("failed to read PDF: {e}")))?;

        let doc = PdfDocument::open(path)
            .map_err(|e| ExtractionError::OpenFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            ExtractionError::OpenFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let embedded_text = match doc.extract_text(page_index) {
                Ok(raw) => Some(sanitize_extracted_text(&raw)).filter(|t| !t.is_empty()),
                Err(e) => {
                    tracing::debug!(page = page_index + 1, error = %e, "No embedded text layer");
                    None
                }
            };
            pages.push(Page::new(page_index + 1, embedded_text));
        }

        Ok((data, pages))
    }
}

#[async_trait]
impl PageSource for PdfPageSource {
    fn pages(&self) -> &[Page] {
        &self.pages
    }

    async fn render(&self, page_index: usize, dpi: u32) -> Result<Vec<u8>, ExtractionError> {
        let renderer = self
            .renderer
            .get_or_try_init(|| async { PdfRenderer::spawn(Arc::clone(&self.data)) })
            .await?;

        tokio::time::timeout(RENDER_TIMEOUT, renderer.render(page_index, dpi))
            .await
            .map_err(|_| ExtractionError::Timeout)?
    }
}

pub struct PdfDocumentOpener;

#[async_trait]
impl DocumentOpener for PdfDocumentOpener {
    async fn open(
        &self,
        path: &Path,
        kind: FileKind,
    ) -> Result<Arc<dyn PageSource>, ExtractionError> {
        if kind != FileKind::Pdf {
            return Err(ExtractionError::UnsupportedFileType(kind.to_string()));
        }
        Ok(Arc::new(PdfPageSource::open(path).await?))
    }
}
