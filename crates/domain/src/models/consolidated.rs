//! Consolidated, equipment-centric view produced by an aggregation cycle.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::equipment_state::EquipmentState;
use super::facility::GeoPoint;

/// Resolved current operating state. Every field is absent when the latest
/// state event is missing or references an unknown state id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentState {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub color: Option<String>,
}

impl From<&EquipmentState> for CurrentState {
    fn from(state: &EquipmentState) -> Self {
        Self {
            id: Some(state.id),
            name: Some(state.name.clone()),
            color: Some(state.color.clone()),
        }
    }
}

/// The single current-state view of one piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedEquipment {
    pub id: Uuid,
    pub name: String,
    pub model_name: Option<String>,
    pub position: Option<GeoPoint>,
    pub state: CurrentState,
}

impl ConsolidatedEquipment {
    /// Name of the current state, if resolved.
    pub fn state_name(&self) -> Option<&str> {
        self.state.name.as_deref()
    }
}
