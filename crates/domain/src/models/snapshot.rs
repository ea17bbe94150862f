//! Raw input collections of one aggregation cycle.

use serde::{Deserialize, Serialize};

use super::equipment::{Equipment, EquipmentModel};
use super::equipment_state::EquipmentState;
use super::facility::MaintenanceFacility;
use super::history::{PositionHistory, StateHistory};

/// Upstream collections fetched independently for each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Equipment,
    EquipmentModels,
    EquipmentStates,
    StateHistory,
    PositionHistory,
    MaintenanceFacilities,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Self::Equipment,
        Self::EquipmentModels,
        Self::EquipmentStates,
        Self::StateHistory,
        Self::PositionHistory,
        Self::MaintenanceFacilities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equipment => "equipment",
            Self::EquipmentModels => "equipment_models",
            Self::EquipmentStates => "equipment_states",
            Self::StateHistory => "state_history",
            Self::PositionHistory => "position_history",
            Self::MaintenanceFacilities => "maintenance_facilities",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complete, immutable snapshot of the upstream collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySnapshot {
    pub equipment: Vec<Equipment>,
    pub models: Vec<EquipmentModel>,
    pub states: Vec<EquipmentState>,
    pub state_history: Vec<StateHistory>,
    pub position_history: Vec<PositionHistory>,
    pub facilities: Vec<MaintenanceFacility>,
}
