//! Route definitions for the pollboard server

use crate::{
    handlers::{admin, health},
    state::AppState,
};
use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;

/// Admin pages
pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(admin::ADMIN_PATH, get(admin::admin_page))
        .route(admin::DELETE_PATH, post(admin::delete_poll))
}

/// Health check routes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
}

/// Build the complete router
pub fn build_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(admin_routes())
        .merge(health_routes())
        .fallback(not_found_handler)
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Not Found",
            "code": "ROUTE_NOT_FOUND",
            "message": "The requested endpoint does not exist"
        })),
    )
}
