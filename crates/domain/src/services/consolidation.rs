//! Equipment join engine.
//!
//! Joins the equipment catalog with the model and state catalogs and the
//! reduced state/position timelines into one consolidated record per
//! equipment, preserving the input order of the equipment collection.

use tracing::debug;
use validator::Validate;

use crate::models::{
    ConsolidatedEquipment, CurrentState, Equipment, EquipmentModel, EquipmentState, GeoPoint,
    PositionHistory, StateHistory, TelemetrySnapshot,
};
use crate::services::catalog_index::CatalogIndex;
use crate::services::timeline::{index_by_equipment, latest};

/// Build one consolidated record per equipment.
///
/// Never fails: a missing model, state or history degrades the matching
/// field to absent. History entries for unknown equipment are ignored.
///
/// The position is taken from the fix with the greatest timestamp. When that
/// fix has out-of-range coordinates the position is absent; older fixes are
/// never promoted in its place.
pub fn consolidate(
    equipment: &[Equipment],
    models: &[EquipmentModel],
    states: &[EquipmentState],
    state_history: &[StateHistory],
    position_history: &[PositionHistory],
) -> Vec<ConsolidatedEquipment> {
    let catalog = CatalogIndex::build(models, states);
    let states_by_equipment = index_by_equipment(state_history);
    let positions_by_equipment = index_by_equipment(position_history);

    let records: Vec<ConsolidatedEquipment> = equipment
        .iter()
        .map(|item| {
            let model_name = catalog
                .model(&item.equipment_model_id)
                .map(|model| model.name.clone());

            let position = positions_by_equipment
                .get(&item.id)
                .and_then(|events| latest(events))
                .filter(|fix| fix.validate().is_ok())
                .map(|fix| GeoPoint::new(fix.lat, fix.lon));

            let state = states_by_equipment
                .get(&item.id)
                .and_then(|events| latest(events))
                .and_then(|event| catalog.state(&event.equipment_state_id))
                .map(CurrentState::from)
                .unwrap_or_default();

            ConsolidatedEquipment {
                id: item.id,
                name: item.name.clone(),
                model_name,
                position,
                state,
            }
        })
        .collect();

    debug!(
        equipment_count = records.len(),
        models = catalog.model_count(),
        states = catalog.state_count(),
        without_model = records.iter().filter(|r| r.model_name.is_none()).count(),
        without_position = records.iter().filter(|r| r.position.is_none()).count(),
        without_state = records.iter().filter(|r| r.state.id.is_none()).count(),
        "Consolidated equipment records"
    );

    records
}

/// [`consolidate`] over a complete snapshot.
pub fn consolidate_snapshot(snapshot: &TelemetrySnapshot) -> Vec<ConsolidatedEquipment> {
    consolidate(
        &snapshot.equipment,
        &snapshot.models,
        &snapshot.states,
        &snapshot.state_history,
        &snapshot.position_history,
    )
}
