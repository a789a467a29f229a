use clausewise::infrastructure::llm::{CompletionClientFactory, CompletionClientFactoryError};
use clausewise::presentation::LlmProvider;
use clausewise::presentation::config::LlmSettings;

fn settings(provider: LlmProvider, api_key: &str, model: &str) -> LlmSettings {
    LlmSettings {
        provider,
        api_key: api_key.to_string(),
        model: model.to_string(),
        base_url: None,
        timeout_seconds: 120,
        max_tokens: 8192,
    }
}

#[test]
fn given_blank_api_key_when_creating_client_then_returns_missing_api_key() {
    let result = CompletionClientFactory::create(&settings(LlmProvider::Gemini, "  ", "gemini"));
    assert!(matches!(
        result,
        Err(CompletionClientFactoryError::MissingApiKey)
    ));
}

#[test]
fn given_blank_model_when_creating_client_then_returns_missing_model() {
    let result = CompletionClientFactory::create(&settings(LlmProvider::OpenAi, "sk-test", ""));
    assert!(matches!(
        result,
        Err(CompletionClientFactoryError::MissingModel)
    ));
}

#[test]
fn given_openai_settings_when_creating_client_then_succeeds() {
    let result =
        CompletionClientFactory::create(&settings(LlmProvider::OpenAi, "sk-test", "gpt-4o-mini"));
    assert!(result.is_ok());
}

#[test]
fn given_gemini_settings_when_creating_client_then_succeeds() {
    let result = CompletionClientFactory::create(&settings(
        LlmProvider::Gemini,
        "gemini-key",
        "gemini-2.0-flash-lite",
    ));
    assert!(result.is_ok());
}
