use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use vidlist_core::{logging, Config, TitleResolver, VideoStore};

use vidlist_api::http;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_file("config.yaml").unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize logging
    logging::init_logging(&config.logging)?;

    info!("Vidlist API server starting...");

    let store = Arc::new(VideoStore::new());
    let resolver = Arc::new(TitleResolver::new(config.resolver.clone()).map_err(|e| {
        error!("Failed to initialize title resolver: {e}");
        anyhow::anyhow!("Title resolver initialization failed: {e}")
    })?);
    info!("Title resolver initialized");

    let router = http::create_router(store, resolver);

    let http_address = config.http_address();
    let http_addr: std::net::SocketAddr = http_address
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid HTTP address {http_address}: {e}"))?;

    let listener = tokio::net::TcpListener::bind(http_addr).await.map_err(|e| {
        error!("Failed to bind HTTP address {http_addr}: {e}");
        anyhow::anyhow!("Failed to bind {http_addr}: {e}")
    })?;

    info!("HTTP server listening on {http_addr}");

    axum::serve(listener, router).await?;

    Ok(())
}
