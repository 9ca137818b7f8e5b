//! API request handlers

use crate::api::{SearchParams, TitleParams};
use crate::graph::GraphProjection;
use crate::recommend::Recommendations;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

// ============================================================================
// Health check
// ============================================================================

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub neo4j: String,
}

/// Health check handler, verifies actual connectivity to Neo4j.
///
/// Returns 200 + `"ok"` when Neo4j answers, 503 + `"unhealthy"` otherwise.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let neo4j_ok = state.neo4j.health_check().await.unwrap_or(false);

    let (http_status, status, neo4j) = if neo4j_ok {
        (StatusCode::OK, "ok", "connected")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "disconnected")
    };

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            neo4j: neo4j.to_string(),
        }),
    )
}

// ============================================================================
// Movies
// ============================================================================

/// GET /api/search?q=: matching titles, newest first
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<String>>, AppError> {
    let Some(q) = params.query() else {
        return Ok(Json(Vec::new()));
    };

    let titles = state
        .neo4j
        .search_titles(q, state.config.recommend.search_limit)
        .await?;

    Ok(Json(titles.into_iter().flatten().collect()))
}

/// GET /api/recommend?title=: the four signals for one movie
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<TitleParams>,
) -> Result<Json<Recommendations>, AppError> {
    let title = params
        .title()
        .ok_or_else(|| AppError::BadRequest("title required".to_string()))?;

    Ok(Json(state.recommender.recommend(title).await?))
}

/// GET /api/graph?title=: one-hop neighborhood projection
pub async fn graph(
    State(state): State<AppState>,
    Query(params): Query<TitleParams>,
) -> Result<Json<GraphProjection>, AppError> {
    let title = params
        .title()
        .ok_or_else(|| AppError::BadRequest("missing title".to_string()))?;

    Ok(Json(state.projector.project(title).await?))
}

// ============================================================================
// Error handling
// ============================================================================

/// Application error type.
///
/// Store failures never reach the client: the full error chain is logged and
/// the response carries only a generic message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
