//! Server-rendered admin pages for the pollboard service
//!
//! `GET /admin` lists every poll for identities holding the admin role and
//! `POST /admin/polls/delete` removes one. Both resolve the caller from the
//! session cookie on every request.

#![forbid(unsafe_code)]

pub mod cache;
pub mod gate;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;

pub use cache::{RevalidationRegistry, ViewCache};
pub use state::AppState;

use axum::Router;
use pollboard_core::Config;
use pollboard_database::Database;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Router with every route and the request logging layer, bound to `state`
pub fn router(state: AppState) -> Router {
    routes::build_router()
        .layer(axum::middleware::from_fn(middleware::request_logging))
        .with_state(Arc::new(state))
}

/// Production application: Postgres-backed state, tracing and request timeout
pub fn build_app(config: Config, database: Database) -> Router {
    let timeout = Duration::from_secs(config.security.request_timeout);

    router(AppState::new(config, database)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(timeout)),
    )
}
