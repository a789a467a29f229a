use async_trait::async_trait;

#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, image_png: &[u8]) -> Result<String, OcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("ocr engine unavailable: {0}")]
    Unavailable(String),
    #[error("ocr failed: {0}")]
    RecognitionFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
