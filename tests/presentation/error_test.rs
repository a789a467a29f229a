use std::time::Duration;

use axum::http::StatusCode;

use clausewise::application::ports::{CompletionError, ExtractionError};
use clausewise::application::services::{AnalysisError, SanitizeError, ValidationError};
use clausewise::presentation::handlers::ApiError;

#[test]
fn given_unsupported_file_type_when_mapping_then_returns_bad_request() {
    let error = ApiError::from(AnalysisError::UnsupportedFileType("contract.docx".to_string()));

    assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    assert!(error.detail().contains("contract.docx"));
}

#[test]
fn given_cancelled_when_mapping_then_returns_gateway_timeout() {
    let error = ApiError::from(AnalysisError::Cancelled(Duration::from_secs(120)));
    assert_eq!(error.status_code(), StatusCode::GATEWAY_TIMEOUT);
}

#[test]
fn given_pipeline_failures_when_mapping_then_return_internal_error_naming_stage() {
    let cases = [
        (
            AnalysisError::Extraction(ExtractionError::OpenFailed("bad xref".to_string())),
            "extraction",
        ),
        (
            AnalysisError::Completion(CompletionError::RateLimited),
            "completion",
        ),
        (AnalysisError::Sanitize(SanitizeError::EmptyResponse), "sanitize"),
        (
            AnalysisError::Validation(ValidationError::SchemaViolation("x".to_string())),
            "validation",
        ),
    ];

    for (analysis_error, stage) in cases {
        let error = ApiError::from(analysis_error);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.detail().starts_with(&format!("{stage} stage failed")));
    }
}

#[test]
fn given_credential_in_upstream_error_when_building_detail_then_redacts_it() {
    let error = ApiError::from(AnalysisError::Completion(CompletionError::ApiRequestFailed(
        "HTTP 401: invalid api_key=sk-live-123".to_string(),
    )));

    let detail = error.detail();

    assert!(detail.contains("api_key=[REDACTED]"));
    assert!(!detail.contains("sk-live-123"));
}
