use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::application::ports::CompletionClient;
use crate::domain::ContractAnalysis;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub extracted_text: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn analyze_handler<C>(
    State(state): State<AppState<C>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ContractAnalysis>, ApiError>
where
    C: CompletionClient + ?Sized + 'static,
{
    let analysis = state
        .analysis_service
        .analyze_text(&request.extracted_text)
        .await?;

    Ok(Json(analysis))
}
