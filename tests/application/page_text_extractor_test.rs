use std::sync::Arc;

use clausewise::application::ports::{OcrEngine, PageSource};
use clausewise::application::services::{DEFAULT_RENDER_DPI, PageTextExtractor};
use clausewise::domain::{ExtractionMethod, Page};
use clausewise::infrastructure::text_processing::{InMemoryPageSource, MockOcrEngine};

fn extractor_with(ocr: Arc<MockOcrEngine>) -> PageTextExtractor {
    PageTextExtractor::new(ocr as Arc<dyn OcrEngine>, DEFAULT_RENDER_DPI)
}

#[tokio::test]
async fn given_page_with_embedded_text_when_extracting_then_skips_ocr() {
    let ocr = Arc::new(MockOcrEngine::new());
    let extractor = extractor_with(Arc::clone(&ocr));
    let source = InMemoryPageSource::from_texts(&[Some("Hello")]);

    let result = extractor.extract(&source.pages()[0], &source).await;

    assert_eq!(result.method, ExtractionMethod::Embedded);
    assert_eq!(result.text, "Hello");
    assert_eq!(source.render_calls(), 0);
    assert_eq!(ocr.calls(), 0);
}

#[tokio::test]
async fn given_whitespace_only_embedded_text_when_extracting_then_falls_back_to_ocr() {
    let ocr = Arc::new(MockOcrEngine::new());
    let extractor = extractor_with(Arc::clone(&ocr));
    let source = InMemoryPageSource::from_texts(&[Some(" \n\t ")]);

    let result = extractor.extract(&source.pages()[0], &source).await;

    assert_eq!(result.method, ExtractionMethod::Ocr);
    assert_eq!(result.text, "OCR:page-1");
    assert_eq!(source.render_calls(), 1);
}

#[tokio::test]
async fn given_page_without_text_layer_when_extracting_then_uses_ocr() {
    let ocr = Arc::new(MockOcrEngine::new());
    let extractor = extractor_with(Arc::clone(&ocr));
    let source = InMemoryPageSource::new(vec![Page::new(3, None)]);

    let result = extractor.extract(&source.pages()[0], &source).await;

    assert_eq!(result.page_index, 3);
    assert_eq!(result.method, ExtractionMethod::Ocr);
    assert_eq!(result.text, "OCR:page-3");
    assert_eq!(ocr.calls(), 1);
}

#[tokio::test]
async fn given_render_failure_when_extracting_then_degrades_to_empty_ocr_text() {
    let ocr = Arc::new(MockOcrEngine::new());
    let extractor = extractor_with(Arc::clone(&ocr));
    let source = InMemoryPageSource::from_texts(&[None]).with_failing_render(1);

    let result = extractor.extract(&source.pages()[0], &source).await;

    assert_eq!(result.method, ExtractionMethod::Ocr);
    assert_eq!(result.text, "");
    assert_eq!(ocr.calls(), 0);
}

#[tokio::test]
async fn given_ocr_failure_when_extracting_then_degrades_to_empty_ocr_text() {
    let ocr = Arc::new(MockOcrEngine::failing());
    let extractor = extractor_with(Arc::clone(&ocr));
    let source = InMemoryPageSource::from_texts(&[None]);

    let result = extractor.extract(&source.pages()[0], &source).await;

    assert_eq!(result.method, ExtractionMethod::Ocr);
    assert_eq!(result.text, "");
    assert_eq!(ocr.calls(), 1);
}
