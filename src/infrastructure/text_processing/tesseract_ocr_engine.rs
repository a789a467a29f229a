use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{OcrEngine, OcrError};

use super::text_sanitizer::sanitize_extracted_text;

pub const DEFAULT_OCR_LANGUAGES: &str = "kor+eng";
/// Tesseract page segmentation mode 6: assume a single uniform block of text.
pub const DEFAULT_PAGE_SEGMENTATION: u8 = 6;

const OCR_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the `tesseract` CLI over a PNG written to a private temp file.
pub struct TesseractOcrEngine {
    binary: PathBuf,
    languages: String,
    page_segmentation: u8,
}

impl TesseractOcrEngine {
    pub fn new(binary: impl Into<PathBuf>, languages: &str, page_segmentation: u8) -> Self {
        Self {
            binary: binary.into(),
            languages: languages.to_string(),
            page_segmentation,
        }
    }

    fn command(&self, image_path: &std::path::Path) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .arg("--psm")
            .arg(self.page_segmentation.to_string())
            .kill_on_drop(true);
        command
    }
}

impl Default for TesseractOcrEngine {
    fn default() -> Self {
        Self::new("tesseract", DEFAULT_OCR_LANGUAGES, DEFAULT_PAGE_SEGMENTATION)
    }
}

#[async_trait]
impl OcrEngine for TesseractOcrEngine {
    #[tracing::instrument(skip(self, image_png), fields(bytes = image_png.len(), languages = %self.languages))]
    async fn recognize(&self, image_png: &[u8]) -> Result<String, OcrError> {
        let mut image_file = tempfile::Builder::new()
            .prefix("ocr-page-")
            .suffix(".png")
            .tempfile()?;
        image_file.write_all(image_png)?;
        image_file.flush()?;

        let output = tokio::time::timeout(OCR_TIMEOUT, self.command(image_file.path()).output())
            .await
            .map_err(|_| OcrError::RecognitionFailed("tesseract timed out".to_string()))?
            .map_err(|e| {
                OcrError::Unavailable(format!("failed to spawn {}: {e}", self.binary.display()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::RecognitionFailed(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(sanitize_extracted_text(&text))
    }
}
