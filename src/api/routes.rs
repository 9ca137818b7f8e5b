//! API route definitions

use super::handlers;
use crate::AppState;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // ====================================================================
        // Movies
        // ====================================================================
        .route("/api/search", get(handlers::search))
        .route("/api/recommend", get(handlers::recommend))
        .route("/api/graph", get(handlers::graph))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
