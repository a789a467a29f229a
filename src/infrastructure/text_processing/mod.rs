mod composite_document_opener;
mod image_page_source;
mod in_memory_page_source;
mod mock_ocr_engine;
mod pdf_page_source;
mod pdf_rasterizer;
mod tesseract_ocr_engine;
mod text_sanitizer;

pub use composite_document_opener::CompositeDocumentOpener;
pub use image_page_source::{ImageDocumentOpener, ImagePageSource};
pub use in_memory_page_source::{InMemoryPageSource, MockDocumentOpener};
pub use mock_ocr_engine::MockOcrEngine;
pub use pdf_page_source::{PdfDocumentOpener, PdfPageSource};
pub use tesseract_ocr_engine::{DEFAULT_OCR_LANGUAGES, DEFAULT_PAGE_SEGMENTATION, TesseractOcrEngine};
pub use text_sanitizer::sanitize_extracted_text;
