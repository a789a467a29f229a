use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::AnalysisError;
use crate::infrastructure::observability::sanitize_for_log;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Analysis(AnalysisError::UnsupportedFileType(_)) => StatusCode::BAD_REQUEST,
            ApiError::Analysis(AnalysisError::Cancelled(_)) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Server-side failures name the failing stage and
    /// carry only a redacted, truncated cause.
    pub fn detail(&self) -> String {
        match self {
            ApiError::BadRequest(message) | ApiError::PayloadTooLarge(message) => message.clone(),
            ApiError::Analysis(AnalysisError::UnsupportedFileType(filename)) => format!(
                "Unsupported file type: {}. Accepted extensions: .pdf, .jpg, .jpeg, .png",
                sanitize_for_log(filename)
            ),
            ApiError::Analysis(e @ AnalysisError::Cancelled(_)) => e.to_string(),
            ApiError::Analysis(e) => format!(
                "{} stage failed: {}",
                e.stage(),
                sanitize_for_log(&e.to_string())
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.detail();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), detail = %detail, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), detail = %detail, "Request rejected");
        }

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
