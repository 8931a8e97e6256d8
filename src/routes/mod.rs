use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod recommendations;

use crate::{
    config::Config,
    corpus,
    error::AppResult,
    middleware::request_id::{make_span, request_id_middleware},
    services::RecommendationEngine,
};

/// Shared application state
///
/// The engine lives behind `RwLock<Arc<...>>`: handlers clone the inner
/// `Arc` under a read guard and score against that snapshot lock-free, while
/// a reload builds a complete replacement engine and swaps it in under the
/// write guard. No request ever observes a half-rebuilt index.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<RwLock<Arc<RecommendationEngine>>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(engine: RecommendationEngine, config: Config) -> Self {
        Self {
            engine: Arc::new(RwLock::new(Arc::new(engine))),
            config: Arc::new(config),
        }
    }

    /// Current corpus snapshot; stays valid even across a concurrent reload.
    pub async fn engine(&self) -> Arc<RecommendationEngine> {
        self.engine.read().await.clone()
    }

    async fn publish(&self, engine: RecommendationEngine) {
        *self.engine.write().await = Arc::new(engine);
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recommendations/site/:site_id",
            get(recommendations::for_site),
        )
        .route("/recommendations/user", post(recommendations::for_user))
        .route("/admin/reload", post(reload))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Rebuilds the corpus snapshot and text index from the configured file.
///
/// The new pair is published atomically; on any failure the previous
/// snapshot keeps serving untouched.
async fn reload(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let sites = corpus::load_sites(Path::new(&state.config.corpus_path)).await?;
    let engine = RecommendationEngine::new(sites)?;
    let site_count = engine.site_count();

    state.publish(engine).await;
    tracing::info!(sites = site_count, "corpus reloaded");

    Ok(Json(json!({ "sites": site_count })))
}
