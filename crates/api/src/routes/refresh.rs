//! Manual aggregation trigger.

use axum::{extract::State, Extension, Json};
use domain::models::FleetSummary;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::RequestId;

/// Run one aggregation cycle now.
///
/// POST /api/v1/refresh
///
/// On failure the cached fleet view is kept and 503 is returned.
pub async fn trigger_refresh(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Json<FleetSummary>, ApiError> {
    info!(request_id = %request_id.0, "Manual fleet refresh requested");
    let view = state.fleet.refresh().await?;
    Ok(Json(view.summary()))
}
