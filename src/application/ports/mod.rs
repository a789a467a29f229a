mod completion_client;
mod ocr_engine;
mod page_source;
mod scratch_store;

pub use completion_client::{CompletionClient, CompletionError, CompletionRequest, ResponseFormat};
pub use ocr_engine::{OcrEngine, OcrError};
pub use page_source::{DocumentOpener, ExtractionError, PageSource};
pub use scratch_store::{ScratchError, ScratchFile, ScratchStore};
