use axum::extract::{Query, State};
use axum::Json;

use crate::github::query::SearchFilters;
use crate::models::{PopularQuery, ScoredRepo, ScoringConfigResponse, WeightsResponse};
use crate::scoring::ranking::fetch_and_score;
use crate::state::AppState;

/// GET /api/repos/popular - Search with query fallback, then rank by
/// composite popularity score. An exhausted search is an empty array.
pub async fn popular(
    State(state): State<AppState>,
    Query(params): Query<PopularQuery>,
) -> Json<Vec<ScoredRepo>> {
    let filters = SearchFilters::new(params.created_from, params.language, params.q);
    let ranked = fetch_and_score(
        state.backend.as_ref(),
        state.engine.as_ref(),
        &filters,
        params.limit,
    )
    .await;
    Json(ranked)
}

/// GET /api/config - Active scoring configuration (token redacted)
pub async fn get_config(State(state): State<AppState>) -> Json<ScoringConfigResponse> {
    let weights = state.engine.weights();
    Json(ScoringConfigResponse {
        weights: WeightsResponse {
            stars: weights.stars,
            forks: weights.forks,
            recency: weights.recency,
        },
        tau_days: state.engine.tau_days(),
        base_url: state.config.github.base_url.clone(),
        has_token: state.config.github.token.is_some(),
    })
}
