use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::CompletionClient;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: &'static str,
    pub scratch: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Readiness: the scratch directory must accept a file. The configured
/// completion provider is reported but not called.
pub async fn health_handler<C>(State(state): State<AppState<C>>) -> impl IntoResponse
where
    C: CompletionClient + ?Sized + 'static,
{
    let provider = state.provider.as_str();

    match state.scratch_store.check_writable().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                provider,
                scratch: "writable",
                error: None,
            }),
        ),
        Err(e) => {
            let error = sanitize_for_log(&e.to_string());
            tracing::warn!(error = %error, "Scratch directory not writable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    provider,
                    scratch: "unwritable",
                    error: Some(error),
                }),
            )
        }
    }
}
