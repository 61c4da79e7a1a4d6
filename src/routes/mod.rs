pub mod health;
pub mod questions;

use axum::Router;

use crate::state::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new().nest("/api", api_routes(state))
}

/// API routes under /api prefix
fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .route(
            "/questions/query",
            axum::routing::post(questions::query_question),
        )
        .with_state(state)
}
