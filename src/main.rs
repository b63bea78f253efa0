mod adapters;
mod api;
mod config;
mod domain;
mod error;
mod ports;

use std::sync::Arc;

use adapters::readers::ReaderRegistry;
use adapters::services::AnthropicService;
use config::Settings;
use ports::llm::{CompletionPort, LlmConfig};

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionPort>,
    pub readers: Arc<ReaderRegistry>,
    pub llm_config: LlmConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("Starting note-smart v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::from_env()?;

    let state = AppState {
        llm: Arc::new(AnthropicService::new(settings.api_key.clone())),
        readers: Arc::new(ReaderRegistry::new()),
        llm_config: LlmConfig::default(),
    };

    let app = api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    log::info!("Listening on http://{}", settings.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
