//! Health check endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use domain::models::FleetSummary;
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet: Option<FleetSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_refresh: Option<RefreshHealth>,
}

/// Outcome of the latest aggregation attempt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RefreshHealth {
    pub attempted_at: DateTime<Utc>,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Full health check endpoint.
///
/// `healthy` once a fleet view is cached, `degraded` when the latest
/// refresh failed but an older view is still served.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let fleet = state.fleet.current().await.map(|view| view.summary());
    let last_refresh = state.fleet.last_refresh().await.map(|status| RefreshHealth {
        attempted_at: status.attempted_at,
        succeeded: status.error.is_none(),
        error: status.error,
    });

    let failing = last_refresh.as_ref().is_some_and(|r| !r.succeeded);
    let (status_code, status) = match (&fleet, failing) {
        (None, _) => (StatusCode::SERVICE_UNAVAILABLE, "unhealthy"),
        (Some(_), true) => (StatusCode::OK, "degraded"),
        (Some(_), false) => (StatusCode::OK, "healthy"),
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: state.config.source.kind.clone(),
        fleet,
        last_refresh,
    };

    (status_code, Json(response))
}

/// Liveness probe endpoint.
///
/// Returns 200 OK if the process is running.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe endpoint.
///
/// Returns 200 OK once a consolidated fleet view exists.
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, StatusCode> {
    if state.fleet.current().await.is_some() {
        Ok(Json(StatusResponse {
            status: "ready".to_string(),
        }))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}
