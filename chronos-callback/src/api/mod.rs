//! API Module
//!
//! HTTP endpoints Chronos calls back into.

pub mod callback;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Create the router with all endpoints
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/jobcallback/{id}", post(callback::job_callback))
        .layer(TraceLayer::new_for_http())
}
