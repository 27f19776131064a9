use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use screener::config::Config;
use screener::routes::build_router;
use screener::search_client::{HttpSearchBackend, SearchBackend, UnconfiguredSearchBackend};
use screener::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Screener v{}", env!("CARGO_PKG_VERSION"));

    let search = build_search_backend(&config)?;
    let state = AppState::new(config.clone(), search);
    info!("Database ready at startup: {}", config.database_ready);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// HTTP backend when `SEARCH_API_URL` is set, otherwise one that always reports 503.
fn build_search_backend(config: &Config) -> Result<Arc<dyn SearchBackend>> {
    match &config.search_api_url {
        Some(url) => {
            let backend = HttpSearchBackend::new(
                url.clone(),
                Duration::from_secs(config.search_timeout_secs),
            )?;
            info!("Search backend: {}", backend.endpoint());
            Ok(Arc::new(backend))
        }
        None => {
            warn!("SEARCH_API_URL is not set; /api/v1/search will return 503");
            Ok(Arc::new(UnconfiguredSearchBackend))
        }
    }
}
