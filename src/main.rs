use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use whisper_relay::application::services::RelayService;
use whisper_relay::infrastructure::audio::OpenAiWhisperEngine;
use whisper_relay::infrastructure::observability::{TracingConfig, init_tracing};
use whisper_relay::infrastructure::storage::TempDirScratchStore;
use whisper_relay::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    if settings.openai.api_key.is_empty() {
        tracing::warn!(
            "OPENAI_API_KEY not set; the service will start but every transcription request will fail"
        );
    }

    let engine = Arc::new(OpenAiWhisperEngine::new(
        settings.openai.api_key.clone(),
        Some(settings.openai.base_url.clone()),
        Some(settings.openai.model.clone()),
        settings.openai.timeout(),
    )?);
    let store = Arc::new(TempDirScratchStore::system()?);

    let relay_service = Arc::new(RelayService::new(engine, store));

    let state = AppState {
        relay_service,
        max_upload_bytes: settings.upload.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!(model = %settings.openai.model, "Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
