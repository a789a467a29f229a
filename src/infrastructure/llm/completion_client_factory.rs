use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::application::ports::CompletionClient;
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::gemini_client::GeminiCompletionClient;
use super::openai_client::OpenAiCompletionClient;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum CompletionClientFactoryError {
    #[error("llm.api_key is required")]
    MissingApiKey,
    #[error("llm.model is required")]
    MissingModel,
    #[error("completion client initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct CompletionClientFactory;

impl CompletionClientFactory {
    /// Only the connect phase is bounded here; the overall deadline belongs to
    /// the analysis service.
    pub fn create(
        settings: &LlmSettings,
    ) -> Result<Arc<dyn CompletionClient>, CompletionClientFactoryError> {
        if settings.api_key.trim().is_empty() {
            return Err(CompletionClientFactoryError::MissingApiKey);
        }
        if settings.model.trim().is_empty() {
            return Err(CompletionClientFactoryError::MissingModel);
        }

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| CompletionClientFactoryError::InitializationFailed(e.to_string()))?;

        let base_url = settings.base_url.as_deref();

        match settings.provider {
            LlmProvider::OpenAi => {
                tracing::info!(model = %settings.model, "Using OpenAI completion client");
                Ok(Arc::new(OpenAiCompletionClient::new(
                    client,
                    base_url,
                    &settings.api_key,
                    &settings.model,
                    settings.max_tokens,
                )))
            }
            LlmProvider::Gemini => {
                tracing::info!(model = %settings.model, "Using Gemini completion client");
                Ok(Arc::new(GeminiCompletionClient::new(
                    client,
                    base_url,
                    &settings.api_key,
                    &settings.model,
                    settings.max_tokens,
                )))
            }
        }
    }
}
