use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::application::ports::CompletionClient;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::upload::read_upload;

#[derive(Serialize)]
pub struct OcrResponse {
    pub text: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn ocr_handler<C>(
    State(state): State<AppState<C>>,
    mut multipart: Multipart,
) -> Result<Json<OcrResponse>, ApiError>
where
    C: CompletionClient + ?Sized + 'static,
{
    let upload = read_upload(&mut multipart).await?;

    let document = state
        .analysis_service
        .extract_text(&upload.filename, &upload.data)
        .await?;

    Ok(Json(OcrResponse {
        text: document.render(),
    }))
}
