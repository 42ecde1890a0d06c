//! # Health Check Handler
//!
//! Liveness endpoint for monitoring and load balancing.

use crate::web::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

/// Basic health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
}

/// Basic health check endpoint: GET /health
///
/// Returns OK if the service is running; no downstream checks.
pub async fn basic_health(_state: State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
