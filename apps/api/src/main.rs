mod config;
mod confirmation;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod routes;
mod state;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::store::{spawn_sweeper, ExtractionStore, InMemoryStore};
use crate::extraction::text::NativeReader;
use crate::llm_client::OllamaClient;
use crate::routes::build_router;
use crate::state::AppState;

const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume extraction API v{}", env!("CARGO_PKG_VERSION"));

    let llm = OllamaClient::new(&config.ollama_url, &config.ollama_model, config.llm_timeout)
        .context("Failed to build model HTTP client")?;
    info!(
        "LLM client initialized (model: {}, backend: {})",
        llm.model(),
        config.ollama_url
    );

    let store: Arc<dyn ExtractionStore> = Arc::new(InMemoryStore::new(config.extraction_ttl));
    spawn_sweeper(store.clone(), config.extraction_ttl.min(MAX_SWEEP_INTERVAL));
    info!(
        "Extraction store initialized (ttl: {}s)",
        config.extraction_ttl.as_secs()
    );

    let state = AppState {
        config: config.clone(),
        llm: Arc::new(llm),
        reader: Arc::new(NativeReader),
        store,
        http: reqwest::Client::new(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
