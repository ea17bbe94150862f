//! Equipment query route handlers.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use domain::models::{
    EarningsSummary, EquipmentDetail, EquipmentQuery, FilterCriteria, FleetFacets, PositionEvent,
    QueryResult, StateHistoryEntry,
};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Create equipment routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_equipment))
        .route("/facets", get(get_facets))
        .route("/:equipment_id", get(get_equipment))
        .route("/:equipment_id/earnings", get(get_earnings))
        .route("/:equipment_id/history", get(get_state_history))
        .route("/:equipment_id/trail", get(get_position_trail))
}

fn not_found(equipment_id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Equipment {} not found", equipment_id))
}

/// Filter and search the consolidated fleet.
///
/// GET /api/v1/equipment?state=&model=&search=
async fn list_equipment(
    State(state): State<AppState>,
    Query(query): Query<EquipmentQuery>,
) -> Result<Json<QueryResult>, ApiError> {
    query.validate()?;

    let view = state.fleet.require().await?;
    let criteria = FilterCriteria::from(query);
    let result = view.query(&criteria);

    tracing::debug!(
        filtered = result.filtered.len(),
        search_results = result.search_results.len(),
        "Equipment query served"
    );

    Ok(Json(result))
}

/// Distinct state and model names for filter menus.
///
/// GET /api/v1/equipment/facets
async fn get_facets(State(state): State<AppState>) -> Result<Json<FleetFacets>, ApiError> {
    let view = state.fleet.require().await?;
    Ok(Json(view.facets()))
}

/// GET /api/v1/equipment/:equipment_id
async fn get_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<Uuid>,
) -> Result<Json<EquipmentDetail>, ApiError> {
    let view = state.fleet.require().await?;
    view.detail_for(equipment_id)
        .map(Json)
        .ok_or_else(|| not_found(equipment_id))
}

/// GET /api/v1/equipment/:equipment_id/earnings
async fn get_earnings(
    State(state): State<AppState>,
    Path(equipment_id): Path<Uuid>,
) -> Result<Json<EarningsSummary>, ApiError> {
    let view = state.fleet.require().await?;
    view.earnings_for(equipment_id)
        .map(Json)
        .ok_or_else(|| not_found(equipment_id))
}

/// State history, newest first.
///
/// GET /api/v1/equipment/:equipment_id/history
async fn get_state_history(
    State(state): State<AppState>,
    Path(equipment_id): Path<Uuid>,
) -> Result<Json<Vec<StateHistoryEntry>>, ApiError> {
    let view = state.fleet.require().await?;
    view.state_history_for(equipment_id)
        .map(Json)
        .ok_or_else(|| not_found(equipment_id))
}

/// Position fixes, oldest first.
///
/// GET /api/v1/equipment/:equipment_id/trail
async fn get_position_trail(
    State(state): State<AppState>,
    Path(equipment_id): Path<Uuid>,
) -> Result<Json<Vec<PositionEvent>>, ApiError> {
    let view = state.fleet.require().await?;
    view.position_trail_for(equipment_id)
        .map(Json)
        .ok_or_else(|| not_found(equipment_id))
}
