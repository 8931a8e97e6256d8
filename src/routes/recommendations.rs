use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::{
    error::AppResult,
    models::{Site, UserProfile},
};

/// Query parameters shared by both recommendation endpoints
#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub limit: Option<usize>,
}

impl RecommendationParams {
    /// A coordinate counts only when both halves were supplied.
    fn location(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lon)
    }
}

/// Handler for site-to-site recommendations
///
/// Unknown site ids return an empty list with 200, indistinguishable from
/// "nothing relevant found" by design.
pub async fn for_site(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
    Query(params): Query<RecommendationParams>,
) -> AppResult<Json<Vec<Site>>> {
    let engine = state.engine().await;
    let limit = params.limit.unwrap_or(state.config.site_limit);

    let recommendations = engine.recommend_for_site(&site_id, limit, params.location());

    tracing::debug!(
        site_id = %site_id,
        limit,
        returned = recommendations.len(),
        "site recommendations served"
    );

    Ok(Json(recommendations))
}

/// Handler for personalized recommendations
///
/// The user profile travels in the request body; session handling is an
/// external collaborator. Cold profiles return an empty list with 200.
pub async fn for_user(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
    Json(profile): Json<UserProfile>,
) -> AppResult<Json<Vec<Site>>> {
    let engine = state.engine().await;
    let limit = params.limit.unwrap_or(state.config.user_limit);

    let recommendations = engine.recommend_for_user(&profile, limit, params.location());

    tracing::debug!(
        history_terms = profile.search_history.len(),
        visited = profile.visited_site_ids.len(),
        limit,
        returned = recommendations.len(),
        "personalized recommendations served"
    );

    Ok(Json(recommendations))
}
