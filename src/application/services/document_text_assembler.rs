use std::sync::Arc;

use futures::StreamExt;
use futures::stream;

use crate::application::ports::PageSource;
use crate::domain::{DocumentText, ExtractionMethod};

use super::page_text_extractor::PageTextExtractor;

pub const DEFAULT_MAX_CONCURRENT_PAGES: usize = 4;

pub struct DocumentTextAssembler {
    extractor: Arc<PageTextExtractor>,
    max_concurrent_pages: usize,
}

impl DocumentTextAssembler {
    pub fn new(extractor: Arc<PageTextExtractor>, max_concurrent_pages: usize) -> Self {
        Self {
            extractor,
            max_concurrent_pages: max_concurrent_pages.max(1),
        }
    }

    /// Extracts every page with at most `max_concurrent_pages` in flight.
    /// `buffered` yields results in input order, so blocks stay in page order.
    #[tracing::instrument(skip(self, source), fields(page_count = source.pages().len()))]
    pub async fn assemble(&self, source: Arc<dyn PageSource>) -> DocumentText {
        let pages = source.pages().to_vec();

        let blocks: Vec<_> = stream::iter(pages)
            .map(|page| {
                let extractor = Arc::clone(&self.extractor);
                let source = Arc::clone(&source);
                async move { extractor.extract(&page, source.as_ref()).await }
            })
            .buffered(self.max_concurrent_pages)
            .collect()
            .await;

        let document = DocumentText::new(blocks);

        tracing::info!(
            pages = document.page_count(),
            embedded = document.count_by_method(ExtractionMethod::Embedded),
            ocr = document.count_by_method(ExtractionMethod::Ocr),
            "Document text assembled"
        );

        document
    }
}
