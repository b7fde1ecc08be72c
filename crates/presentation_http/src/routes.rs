//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Chat API (v1)
        .route("/v1/chat", post(handlers::chat::chat))
        .route("/v1/suggestions", get(handlers::suggestions::suggestions))
        // Time-off API (v1)
        .route("/v1/timeoff", get(handlers::timeoff::list_requests))
        // Change notifications
        .route("/v1/events", get(handlers::events::events))
        // Attach state
        .with_state(state)
}
