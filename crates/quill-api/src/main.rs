//! quill-api server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quill_api::{app, seed, AppState};
use quill_core::{defaults, EmbeddingBackend};
use quill_index::OllamaBackend;
use quill_store::NoteStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT  - "json" or "text" (default: "text")
    //   RUST_LOG    - standard env filter (default: "quill_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "quill_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    info!(log_format = %log_format, "Logging initialized");

    // Get configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| defaults::HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| defaults::PORT.to_string())
        .parse()
        .unwrap_or(defaults::PORT);

    // Embedding backend
    let backend = Arc::new(OllamaBackend::from_env());
    info!(
        model = backend.model_name(),
        dimension = backend.dimension(),
        "Embedding backend initialized"
    );
    if !backend.health_check().await.unwrap_or(false) {
        warn!("Embedding backend unreachable; startup indexing will fail if it stays down");
    }

    // Seed the in-memory store and build the initial index. All state is
    // volatile: every start begins from the demo notes.
    let state = AppState::new(NoteStore::with_notes(seed::demo_notes()), backend);
    info!("Indexing seed notes...");
    state.reindex_all().await?;
    info!("Seed notes indexed");

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
