use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use image::ImageFormat;

use crate::application::ports::{DocumentOpener, ExtractionError, PageSource};
use crate::domain::{FileKind, Page};

/// A scanned image upload: one page with no text layer, so it always goes
/// through OCR. Rendering re-encodes the original pixels as PNG.
pub struct ImagePageSource {
    data: Arc<Vec<u8>>,
    pages: Vec<Page>,
}

impl ImagePageSource {
    pub async fn open(path: &Path) -> Result<Self, ExtractionError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| ExtractionError::OpenFailed(format!("failed to read image: {e}")))?;

        image::guess_format(&data)
            .map_err(|e| ExtractionError::OpenFailed(format!("unrecognized image data: {e}")))?;

        Ok(Self {
            data: Arc::new(data),
            pages: vec![Page::new(1, None)],
        })
    }
}

#[async_trait]
impl PageSource for ImagePageSource {
    fn pages(&self) -> &[Page] {
        &self.pages
    }

    async fn render(&self, page_index: usize, _dpi: u32) -> Result<Vec<u8>, ExtractionError> {
        let data = Arc::clone(&self.data);

        tokio::task::spawn_blocking(move || {
            let img = image::load_from_memory(&data).map_err(|e| ExtractionError::RenderFailed {
                page: page_index,
                message: format!("image decode failed: {e}"),
            })?;

            let mut png_bytes: Vec<u8> = Vec::new();
            img.write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
                .map_err(|e| ExtractionError::RenderFailed {
                    page: page_index,
                    message: format!("PNG encode failed: {e}"),
                })?;
            Ok(png_bytes)
        })
        .await
        .map_err(|e| ExtractionError::RenderFailed {
            page: page_index,
            message: format!("task join error: {e}"),
        })?
    }
}

pub struct ImageDocumentOpener;

#[async_trait]
impl DocumentOpener for ImageDocumentOpener {
    async fn open(
        &self,
        path: &Path,
        kind: FileKind,
    ) -> Result<Arc<dyn PageSource>, ExtractionError> {
        if !kind.is_image() {
            return Err(ExtractionError::UnsupportedFileType(kind.to_string()));
        }
        Ok(Arc::new(ImagePageSource::open(path).await?))
    }
}
