mod analyze;
mod analyze_file;
mod error;
mod health;
mod ocr;
mod upload;

pub use analyze::{AnalyzeRequest, analyze_handler};
pub use analyze_file::{AnalyzeFileResponse, analyze_file_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use ocr::{OcrResponse, ocr_handler};
