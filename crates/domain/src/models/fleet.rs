//! Per-equipment views served from a fleet snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::consolidated::{ConsolidatedEquipment, CurrentState};
use super::earnings::EarningsSummary;
use super::facility::MaintenanceFacility;

/// One resolved entry of an equipment's state history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateHistoryEntry {
    pub date: DateTime<Utc>,
    pub state: CurrentState,
}

/// Closest maintenance facility and its great-circle distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestFacility {
    pub facility: MaintenanceFacility,
    pub distance_meters: f64,
}

/// Everything known about one equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDetail {
    pub equipment: ConsolidatedEquipment,
    pub earnings: EarningsSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_facility: Option<NearestFacility>,
}

/// Distinct filter values present in the consolidated set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetFacets {
    pub states: Vec<String>,
    pub models: Vec<String>,
}

/// Summary counts of a fleet snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub equipment: usize,
    pub with_position: usize,
    pub with_state: usize,
    pub facilities: usize,
    pub aggregated_at: Option<DateTime<Utc>>,
}
