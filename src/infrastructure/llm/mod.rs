mod completion_client_factory;
mod gemini_client;
mod mock_completion_client;
mod openai_client;

pub use completion_client_factory::{CompletionClientFactory, CompletionClientFactoryError};
pub use gemini_client::{GEMINI_BASE_URL, GeminiCompletionClient};
pub use mock_completion_client::MockCompletionClient;
pub use openai_client::{OPENAI_BASE_URL, OpenAiCompletionClient};
