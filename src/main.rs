use std::path::Path;

use tracing_subscriber::EnvFilter;

use heritage_api::{
    config::Config,
    corpus,
    routes::{create_router, AppState},
    services::RecommendationEngine,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // The corpus snapshot and its text index are built once before the
    // server accepts traffic; a server with no model serves nothing.
    let sites = corpus::load_sites(Path::new(&config.corpus_path)).await?;
    tracing::info!(sites = sites.len(), path = %config.corpus_path, "corpus loaded");

    let engine = RecommendationEngine::new(sites)?;
    tracing::info!("recommendation model initialized");

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server listening");

    let state = AppState::new(engine, config);
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
