use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;

use super::error::ApiError;

pub const UPLOAD_FIELD: &str = "file";

pub struct Upload {
    pub filename: String,
    pub data: Bytes,
}

/// Pulls the `file` part out of a multipart body. Parts with other names are
/// skipped.
pub async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart", e))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("Uploaded file has no file name".to_string()))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read file", e))?;

        tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

        return Ok(Upload { filename, data });
    }

    Err(ApiError::BadRequest("No file uploaded".to_string()))
}

fn multipart_error(context: &str, error: MultipartError) -> ApiError {
    let message = format!("{context}: {}", error.body_text());
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(message)
    } else {
        ApiError::BadRequest(message)
    }
}
