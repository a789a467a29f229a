use std::sync::Arc;

use crate::application::ports::{OcrEngine, PageSource};
use crate::domain::{ExtractionMethod, Page, PageText};

pub const DEFAULT_RENDER_DPI: u32 = 300;

/// Two-tier page strategy: trust the embedded text layer when it has content,
/// otherwise render the page and run OCR over the bitmap.
pub struct PageTextExtractor {
    ocr_engine: Arc<dyn OcrEngine>,
    render_dpi: u32,
}

impl PageTextExtractor {
    pub fn new(ocr_engine: Arc<dyn OcrEngine>, render_dpi: u32) -> Self {
        Self {
            ocr_engine,
            render_dpi,
        }
    }

    #[tracing::instrument(skip(self, page, source), fields(page = page.index))]
    pub async fn extract(&self, page: &Page, source: &dyn PageSource) -> PageText {
        if let Some(text) = page.usable_embedded_text() {
            tracing::debug!(chars = text.len(), "Using embedded text layer");
            return PageText::new(page.index, ExtractionMethod::Embedded, text.to_string());
        }

        let text = self.recognize(page, source).await;
        PageText::new(page.index, ExtractionMethod::Ocr, text)
    }

    async fn recognize(&self, page: &Page, source: &dyn PageSource) -> String {
        let bitmap = match source.render(page.index, self.render_dpi).await {
            Ok(bitmap) => bitmap,
            Err(e) => {
                tracing::warn!(error = %e, "Page render failed, continuing with empty text");
                return String::new();
            }
        };

        match self.ocr_engine.recognize(&bitmap).await {
            Ok(text) => {
                tracing::debug!(chars = text.len(), "OCR complete");
                text
            }
            Err(e) => {
                tracing::warn!(error = %e, "OCR failed, continuing with empty text");
                String::new()
            }
        }
    }
}
