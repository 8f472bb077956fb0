//! HTTP service exposing aggregated multimodal evaluation reports.
//!
//! One resource route does the work: `GET /api/multimodal-eval` scans the
//! configured report directory and returns its parsed contents. A health
//! route rounds out the surface.

pub mod config;
pub mod models;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::models::AppState;

/// Assemble the service router with all routes and shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::evals::routes())
        .merge(routes::health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
