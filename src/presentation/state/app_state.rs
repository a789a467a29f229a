use std::sync::Arc;

use crate::application::ports::{CompletionClient, ScratchStore};
use crate::application::services::AnalysisService;
use crate::presentation::config::LlmProvider;

pub struct AppState<C>
where
    C: CompletionClient + ?Sized,
{
    pub analysis_service: Arc<AnalysisService<C>>,
    pub scratch_store: Arc<dyn ScratchStore>,
    pub provider: LlmProvider,
}

impl<C> Clone for AppState<C>
where
    C: CompletionClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            scratch_store: Arc::clone(&self.scratch_store),
            provider: self.provider,
        }
    }
}
