//! # Web API
//!
//! HTTP surface for the registration service. One mutation
//! (`POST /v1/registrations`) plus a health endpoint.

pub mod errors;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use state::AppState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router with tracing and permissive CORS (the
/// landing page is served from a separate origin).
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::basic_health))
        .route("/v1/registrations", post(handlers::registrations::submit_registration))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
