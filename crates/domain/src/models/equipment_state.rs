//! Operating-state catalog and the fixed earnings categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operating-state catalog entry (Operating, Stopped, Maintenance, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentState {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

impl EquipmentState {
    /// The earnings category of this state, if its name is a known one.
    pub fn category(&self) -> Option<StateCategory> {
        StateCategory::from_state_name(&self.name)
    }
}

/// Operating-state category used to pick an hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateCategory {
    Working,
    Idle,
    Maintenance,
}

impl StateCategory {
    /// Maps an operating-state name onto its category.
    ///
    /// Matching is case-insensitive and accepts both the English names and
    /// the Portuguese names used by the upstream catalog. Any other name is
    /// unclassified and yields `None`.
    pub fn from_state_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "operating" | "operando" | "working" => Some(Self::Working),
            "stopped" | "parado" | "idle" => Some(Self::Idle),
            "maintenance" | "manutenção" | "manutencao" => Some(Self::Maintenance),
            _ => None,
        }
    }
}
