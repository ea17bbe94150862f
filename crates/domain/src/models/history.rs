//! Per-equipment state and position timelines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An event carrying the instant it was observed at.
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;
}

/// A per-equipment history: one equipment id and its (unordered) events.
pub trait EquipmentTimeline {
    type Event: Timestamped;

    fn equipment_id(&self) -> Uuid;

    fn events(&self) -> &[Self::Event];
}

/// One entry of an equipment's state-history timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateEvent {
    pub date: DateTime<Utc>,
    pub equipment_state_id: Uuid,
}

impl Timestamped for StateEvent {
    fn timestamp(&self) -> DateTime<Utc> {
        self.date
    }
}

/// State-change history of one equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateHistory {
    pub equipment_id: Uuid,
    #[serde(default)]
    pub states: Vec<StateEvent>,
}

impl EquipmentTimeline for StateHistory {
    type Event = StateEvent;

    fn equipment_id(&self) -> Uuid {
        self.equipment_id
    }

    fn events(&self) -> &[StateEvent] {
        &self.states
    }
}

/// One position fix of an equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PositionEvent {
    pub date: DateTime<Utc>,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub lat: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub lon: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_state_id: Option<Uuid>,
}

impl Timestamped for PositionEvent {
    fn timestamp(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Position history of one equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionHistory {
    pub equipment_id: Uuid,
    #[serde(default)]
    pub positions: Vec<PositionEvent>,
}

impl EquipmentTimeline for PositionHistory {
    type Event = PositionEvent;

    fn equipment_id(&self) -> Uuid {
        self.equipment_id
    }

    fn events(&self) -> &[PositionEvent] {
        &self.positions
    }
}
