pub mod repos;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/repos/popular", get(repos::popular))
        .route("/api/config", get(repos::get_config))
        .with_state(state)
}
