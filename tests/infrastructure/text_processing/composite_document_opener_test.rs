use std::sync::Arc;

use clausewise::application::ports::{DocumentOpener, ExtractionError};
use clausewise::domain::{FileKind, Page};
use clausewise::infrastructure::text_processing::{
    CompositeDocumentOpener, ImageDocumentOpener, PdfDocumentOpener,
};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn write_test_image(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    image::RgbImage::from_pixel(8, 8, image::Rgb([255, 255, 255]))
        .save(&path)
        .unwrap();
    path
}

#[tokio::test]
async fn given_png_upload_when_opening_then_yields_single_page_without_text_layer() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_test_image(&dir, "scan.png");

    let source = CompositeDocumentOpener::with_defaults()
        .open(&path, FileKind::Png)
        .await
        .unwrap();

    assert_eq!(source.pages(), &[Page::new(1, None)]);
}

#[tokio::test]
async fn given_jpeg_upload_when_rendering_then_returns_png_bitmap() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_test_image(&dir, "scan.jpg");

    let source = CompositeDocumentOpener::with_defaults()
        .open(&path, FileKind::Jpeg)
        .await
        .unwrap();
    let bitmap = source.render(1, 300).await.unwrap();

    assert!(bitmap.starts_with(PNG_SIGNATURE));
}

#[tokio::test]
async fn given_corrupt_image_when_opening_then_returns_open_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not an image").unwrap();

    let result = CompositeDocumentOpener::with_defaults()
        .open(&path, FileKind::Png)
        .await;

    assert!(matches!(result, Err(ExtractionError::OpenFailed(_))));
}

#[tokio::test]
async fn given_unregistered_kind_when_opening_then_returns_unsupported() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_test_image(&dir, "scan.png");
    let pdf_only: Arc<dyn DocumentOpener> = Arc::new(PdfDocumentOpener);
    let opener = CompositeDocumentOpener::new(vec![(FileKind::Pdf, pdf_only)]);

    let result = opener.open(&path, FileKind::Png).await;

    assert!(matches!(
        result,
        Err(ExtractionError::UnsupportedFileType(_))
    ));
}

#[tokio::test]
async fn given_pdf_kind_when_opening_with_image_opener_then_returns_unsupported() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_test_image(&dir, "scan.png");

    let result = ImageDocumentOpener.open(&path, FileKind::Pdf).await;

    assert!(matches!(
        result,
        Err(ExtractionError::UnsupportedFileType(_))
    ));
}

#[tokio::test]
async fn given_garbage_pdf_when_opening_then_returns_open_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"this is not a pdf").unwrap();

    let result = PdfDocumentOpener.open(&path, FileKind::Pdf).await;

    assert!(matches!(result, Err(ExtractionError::OpenFailed(_))));
}
