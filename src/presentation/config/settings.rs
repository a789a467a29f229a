use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub extraction: ExtractionSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Gemini,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }

    /// Conventional environment variable holding this provider's credential.
    pub fn api_key_env_var(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Gemini => "GEMINI_API_KEY",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub timeout_seconds: u64,
    pub max_tokens: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub render_dpi: u32,
    pub ocr_languages: String,
    pub ocr_page_segmentation: u8,
    pub tesseract_path: String,
    pub max_concurrent_pages: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub scratch_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("no completion API key configured: set APP_LLM__API_KEY or {0}")]
    MissingApiKey(&'static str),
}

impl Settings {
    /// Layers defaults, `appsettings.{environment}` (optional) and `APP_`
    /// environment variables (`APP_LLM__API_KEY`, `APP_SERVER__PORT`, ...).
    /// A missing completion credential is a startup error.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.max_upload_bytes", 20 * 1024 * 1024)?
            .set_default("llm.provider", "gemini")?
            .set_default("llm.model", "gemini-2.0-flash-lite")?
            .set_default("llm.timeout_seconds", 120)?
            .set_default("llm.max_tokens", 8192)?
            .set_default("extraction.render_dpi", 300)?
            .set_default("extraction.ocr_languages", "kor+eng")?
            .set_default("extraction.ocr_page_segmentation", 6)?
            .set_default("extraction.tesseract_path", "tesseract")?
            .set_default("extraction.max_concurrent_pages", 4)?
            .set_default("storage.scratch_dir", "temp_files")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str().to_lowercase()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        settings.resolve_api_key(|name| std::env::var(name).ok())?;
        Ok(settings)
    }

    /// Falls back to the provider's conventional variable when no key was
    /// configured, and rejects a still-empty key.
    pub fn resolve_api_key<F>(&mut self, lookup: F) -> Result<(), SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fallback_var = self.llm.provider.api_key_env_var();

        if self.llm.api_key.trim().is_empty() {
            self.llm.api_key = lookup(fallback_var).unwrap_or_default();
        }

        if self.llm.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey(fallback_var));
        }

        Ok(())
    }
}
