use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{OcrEngine, OcrError};

/// Echoes the bitmap bytes back as recognized text, prefixed with `OCR:`.
#[derive(Default)]
pub struct MockOcrEngine {
    calls: AtomicUsize,
    fail: bool,
}

impl MockOcrEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OcrEngine for MockOcrEngine {
    async fn recognize(&self, image_png: &[u8]) -> Result<String, OcrError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(OcrError::RecognitionFailed("simulated ocr failure".to_string()));
        }
        Ok(format!("OCR:{}", String::from_utf8_lossy(image_png)))
    }
}
