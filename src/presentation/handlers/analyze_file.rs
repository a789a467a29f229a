use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::application::ports::CompletionClient;
use crate::domain::ContractAnalysis;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::upload::read_upload;

#[derive(Serialize)]
pub struct AnalyzeFileResponse {
    #[serde(rename = "extractedText")]
    pub extracted_text: String,
    #[serde(flatten)]
    pub analysis: ContractAnalysis,
}

/// Upload, extraction and analysis in a single request.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_file_handler<C>(
    State(state): State<AppState<C>>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeFileResponse>, ApiError>
where
    C: CompletionClient + ?Sized + 'static,
{
    let upload = read_upload(&mut multipart).await?;

    let document = state
        .analysis_service
        .extract_text(&upload.filename, &upload.data)
        .await?;
    let extracted_text = document.render();

    let analysis = state.analysis_service.analyze_text(&extracted_text).await?;

    Ok(Json(AnalyzeFileResponse {
        extracted_text,
        analysis,
    }))
}
