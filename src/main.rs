use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use clausewise::application::ports::{DocumentOpener, OcrEngine, ScratchStore};
use clausewise::application::services::{
    AnalysisService, DocumentTextAssembler, PageTextExtractor,
};
use clausewise::infrastructure::llm::CompletionClientFactory;
use clausewise::infrastructure::observability::{TracingConfig, init_tracing};
use clausewise::infrastructure::storage::LocalScratchStore;
use clausewise::infrastructure::text_processing::{CompositeDocumentOpener, TesseractOcrEngine};
use clausewise::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let completion_client = CompletionClientFactory::create(&settings.llm)
        .context("failed to create completion client")?;

    let ocr_engine: Arc<dyn OcrEngine> = Arc::new(TesseractOcrEngine::new(
        settings.extraction.tesseract_path.as_str(),
        &settings.extraction.ocr_languages,
        settings.extraction.ocr_page_segmentation,
    ));
    let extractor = Arc::new(PageTextExtractor::new(ocr_engine, settings.extraction.render_dpi));
    let assembler =
        DocumentTextAssembler::new(extractor, settings.extraction.max_concurrent_pages);

    let scratch_store: Arc<dyn ScratchStore> = Arc::new(
        LocalScratchStore::new(PathBuf::from(&settings.storage.scratch_dir))
            .context("failed to prepare scratch directory")?,
    );
    let document_opener: Arc<dyn DocumentOpener> =
        Arc::new(CompositeDocumentOpener::with_defaults());

    let analysis_service = Arc::new(AnalysisService::new(
        Arc::clone(&scratch_store),
        document_opener,
        assembler,
        completion_client,
        Duration::from_secs(settings.llm.timeout_seconds),
    ));

    let state = AppState {
        analysis_service,
        scratch_store,
        provider: settings.llm.provider,
    };
    let router = create_router(state, settings.server.max_upload_bytes);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!(%addr, provider = settings.llm.provider.as_str(), "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
