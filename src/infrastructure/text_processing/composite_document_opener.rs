use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{DocumentOpener, ExtractionError, PageSource};
use crate::domain::FileKind;

use super::image_page_source::ImageDocumentOpener;
use super::pdf_page_source::PdfDocumentOpener;

pub struct CompositeDocumentOpener {
    openers: HashMap<FileKind, Arc<dyn DocumentOpener>>,
}

impl CompositeDocumentOpener {
    pub fn new(openers: Vec<(FileKind, Arc<dyn DocumentOpener>)>) -> Self {
        Self {
            openers: openers.into_iter().collect(),
        }
    }

    /// PDFs through pdf_oxide/pdfium, JPEG and PNG as single-page images.
    pub fn with_defaults() -> Self {
        let image_opener: Arc<dyn DocumentOpener> = Arc::new(ImageDocumentOpener);
        Self::new(vec![
            (FileKind::Pdf, Arc::new(PdfDocumentOpener)),
            (FileKind::Jpeg, Arc::clone(&image_opener)),
            (FileKind::Png, image_opener),
        ])
    }
}

#[async_trait]
impl DocumentOpener for CompositeDocumentOpener {
    async fn open(
        &self,
        path: &Path,
        kind: FileKind,
    ) -> Result<Arc<dyn PageSource>, ExtractionError> {
        let opener = self
            .openers
            .get(&kind)
            .ok_or_else(|| ExtractionError::UnsupportedFileType(kind.to_string()))?;

        opener.open(path, kind).await
    }
}
