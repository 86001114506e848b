//! Health check endpoints for monitoring and diagnostics

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{DateTime, Utc};
use pollboard_database::Database;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use std::time::Instant;
use tracing::{debug, error};

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: DateTime<Utc>,
    /// Database connectivity status
    pub database: DatabaseHealth,
    /// Process uptime in seconds
    pub uptime_seconds: u64,
}

/// Database health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHealth {
    /// Database connection status
    pub connected: bool,
    /// Ping round trip in milliseconds
    pub response_time_ms: u64,
    /// Open connections in the pool
    pub pool_size: u32,
    /// Idle connections in the pool
    pub idle_connections: u32,
}

/// Readiness check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Service readiness status
    pub ready: bool,
    /// Timestamp of the check
    pub timestamp: DateTime<Utc>,
}

/// Liveness and database status for load balancers and monitoring.
///
/// Returns 503 when the database cannot be reached, or when the service runs
/// without one.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let Some(database) = state.database.as_ref() else {
        debug!("Health check without a database handle");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let database = match check_database_health(database).await {
        Ok(health) => health,
        Err(e) => {
            error!("Database health check failed: {}", e);
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    };

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        database,
        uptime_seconds: uptime_seconds(),
    }))
}

/// Returns 200 once the service can serve traffic
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReadinessResponse>, StatusCode> {
    let Some(database) = state.database.as_ref() else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    match database.health_check().await {
        Ok(()) => Ok(Json(ReadinessResponse {
            ready: true,
            timestamp: Utc::now(),
        })),
        Err(e) => {
            error!("Readiness check failed - database not accessible: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

async fn check_database_health(database: &Database) -> pollboard_core::Result<DatabaseHealth> {
    let start_time = Instant::now();
    database.health_check().await?;
    let response_time_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);

    let pool = database.pool();
    Ok(DatabaseHealth {
        connected: true,
        response_time_ms,
        pool_size: pool.size(),
        idle_connections: u32::try_from(pool.num_idle()).unwrap_or(u32::MAX),
    })
}

/// Seconds since the health module was first touched
pub fn uptime_seconds() -> u64 {
    START_TIME.elapsed().as_secs()
}
