use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{DocumentOpener, ExtractionError, PageSource};
use crate::domain::{FileKind, Page};

/// Synthetic pages for exercising the extraction strategy without a PDF engine.
/// Rendering returns a placeholder bitmap tagged with the page number and
/// counts every call.
pub struct InMemoryPageSource {
    pages: Vec<Page>,
    failing_renders: Vec<usize>,
    render_calls: AtomicUsize,
}

impl InMemoryPageSource {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            failing_renders: Vec::new(),
            render_calls: AtomicUsize::new(0),
        }
    }

    /// Builds pages 1..=n from optional embedded texts.
    pub fn from_texts(texts: &[Option<&str>]) -> Self {
        Self::new(
            texts
                .iter()
                .enumerate()
                .map(|(i, text)| Page::new(i + 1, text.map(str::to_string)))
                .collect(),
        )
    }

    pub fn with_failing_render(mut self, page_index: usize) -> Self {
        self.failing_renders.push(page_index);
        self
    }

    pub fn render_calls(&self) -> usize {
        self.render_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for InMemoryPageSource {
    fn pages(&self) -> &[Page] {
        &self.pages
    }

    async fn render(&self, page_index: usize, _dpi: u32) -> Result<Vec<u8>, ExtractionError> {
        self.render_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_renders.contains(&page_index) {
            return Err(ExtractionError::RenderFailed {
                page: page_index,
                message: "simulated render failure".to_string(),
            });
        }
        Ok(format!("page-{page_index}").into_bytes())
    }
}

/// Opens every path as the same preloaded page source and remembers the paths
/// it was given.
pub struct MockDocumentOpener {
    source: Arc<InMemoryPageSource>,
    opened: std::sync::Mutex<Vec<std::path::PathBuf>>,
}

impl MockDocumentOpener {
    pub fn new(source: Arc<InMemoryPageSource>) -> Self {
        Self {
            source,
            opened: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn opened_paths(&self) -> Vec<std::path::PathBuf> {
        self.opened
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentOpener for MockDocumentOpener {
    async fn open(
        &self,
        path: &Path,
        _kind: FileKind,
    ) -> Result<Arc<dyn PageSource>, ExtractionError> {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(path.to_path_buf());
        }
        Ok(Arc::clone(&self.source) as Arc<dyn PageSource>)
    }
}
