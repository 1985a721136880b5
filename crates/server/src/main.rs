use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_core::{
    config_path_from_env, load_config, validate_config, CatalogQueryEngine, PokeApiClient,
};
use pokedex_server::{api::create_router, state::AppState};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Pokédex server v{}", VERSION);

    // Determine config path
    let config_path = config_path_from_env();

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Catalog API: {}", config.catalog.base_url);
    info!(
        "Page limit: {}, type limit: {}",
        config.browse.page_limit, config.browse.type_limit
    );

    // Create catalog client
    let client =
        PokeApiClient::new(config.catalog.clone()).context("Failed to create PokeAPI client")?;

    // Create query engine
    let engine = Arc::new(
        CatalogQueryEngine::new(Arc::new(client), config.browse.clone())
            .context("Failed to create query engine")?,
    );

    // Initial load. The catalog being unreachable is not fatal: the filter
    // list stays empty until POST /api/v1/types/reload succeeds.
    match engine.load_categories().await {
        Ok(count) => info!("Loaded {} types", count),
        Err(e) => warn!("Initial type load failed: {}", e),
    }
    if let Err(e) = engine.refresh().await {
        warn!("Initial page load failed: {}", e);
    }

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), engine));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
