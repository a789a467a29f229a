use clausewise::presentation::config::{
    ExtractionSettings, LlmProvider, LlmSettings, LoggingSettings, ServerSettings, Settings,
    SettingsError, StorageSettings,
};

fn settings_with(provider: LlmProvider, api_key: &str) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_upload_bytes: 1024,
        },
        llm: LlmSettings {
            provider,
            api_key: api_key.to_string(),
            model: "model".to_string(),
            base_url: None,
            timeout_seconds: 120,
            max_tokens: 8192,
        },
        extraction: ExtractionSettings {
            render_dpi: 300,
            ocr_languages: "kor+eng".to_string(),
            ocr_page_segmentation: 6,
            tesseract_path: "tesseract".to_string(),
            max_concurrent_pages: 4,
        },
        storage: StorageSettings {
            scratch_dir: "temp_files".to_string(),
        },
        logging: LoggingSettings {
            level: "info".to_string(),
            enable_json: false,
        },
    }
}

#[test]
fn given_configured_key_when_resolving_then_keeps_it() {
    let mut settings = settings_with(LlmProvider::Gemini, "configured");

    settings
        .resolve_api_key(|_| Some("fallback".to_string()))
        .unwrap();

    assert_eq!(settings.llm.api_key, "configured");
}

#[test]
fn given_empty_key_when_resolving_then_reads_provider_variable() {
    let mut settings = settings_with(LlmProvider::OpenAi, "");

    settings
        .resolve_api_key(|name| (name == "OPENAI_API_KEY").then(|| "sk-env".to_string()))
        .unwrap();

    assert_eq!(settings.llm.api_key, "sk-env");
}

#[test]
fn given_no_key_anywhere_when_resolving_then_fails_naming_provider_variable() {
    let mut settings = settings_with(LlmProvider::Gemini, " ");

    let result = settings.resolve_api_key(|_| None);

    assert!(matches!(
        result,
        Err(SettingsError::MissingApiKey("GEMINI_API_KEY"))
    ));
}

#[test]
fn given_provider_names_when_deserializing_then_maps_lowercase_values() {
    let openai: LlmProvider = serde_json::from_str("\"openai\"").unwrap();
    let gemini: LlmProvider = serde_json::from_str("\"gemini\"").unwrap();

    assert_eq!(openai, LlmProvider::OpenAi);
    assert_eq!(gemini, LlmProvider::Gemini);
}
