//! Maintenance facility route handlers.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use domain::models::{GeoPoint, MaintenanceFacility, NearestFacility};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Create facility routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_facilities))
        .route("/nearest", get(get_nearest_facility))
}

/// Query parameters for the nearest-facility lookup.
#[derive(Debug, Deserialize)]
pub struct NearestQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Nearest facility to a point. `nearest` is null when no facility exists.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestFacilityResponse {
    pub point: GeoPoint,
    pub nearest: Option<NearestFacility>,
}

/// GET /api/v1/facilities
async fn list_facilities(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceFacility>>, ApiError> {
    let view = state.fleet.require().await?;
    Ok(Json(view.snapshot().facilities.clone()))
}

/// GET /api/v1/facilities/nearest?lat=&lon=
async fn get_nearest_facility(
    State(state): State<AppState>,
    Query(query): Query<NearestQuery>,
) -> Result<Json<NearestFacilityResponse>, ApiError> {
    let point = GeoPoint::new(query.lat, query.lon);
    point.validate()?;

    let view = state.fleet.require().await?;
    Ok(Json(NearestFacilityResponse {
        point,
        nearest: view.nearest_facility_with_distance(point),
    }))
}
