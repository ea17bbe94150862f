//! Per-equipment history views.

use uuid::Uuid;
use validator::Validate;

use crate::models::{
    CurrentState, PositionEvent, PositionHistory, StateHistory, StateHistoryEntry,
};
use crate::services::catalog_index::CatalogIndex;
use crate::services::timeline::{chronological, events_for};

/// Resolved state history of one equipment, newest first.
///
/// Events whose state id is unknown keep their timestamp with an empty
/// state. Equal timestamps keep input order.
pub fn state_history_for(
    catalog: &CatalogIndex<'_>,
    histories: &[StateHistory],
    equipment_id: Uuid,
) -> Vec<StateHistoryEntry> {
    let mut ordered: Vec<_> = events_for(histories, equipment_id).iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));

    ordered
        .into_iter()
        .map(|event| StateHistoryEntry {
            date: event.date,
            state: catalog
                .state(&event.equipment_state_id)
                .map(CurrentState::from)
                .unwrap_or_default(),
        })
        .collect()
}

/// Position fixes of one equipment, oldest first.
///
/// Fixes with out-of-range coordinates are left out.
pub fn position_trail_for(histories: &[PositionHistory], equipment_id: Uuid) -> Vec<PositionEvent> {
    chronological(events_for(histories, equipment_id))
        .into_iter()
        .filter(|fix| fix.validate().is_ok())
        .cloned()
        .collect()
}
