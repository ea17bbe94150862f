//! Equipment and equipment model catalog entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A piece of equipment in the fleet. Source of truth for identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: Uuid,
    pub name: String,
    pub equipment_model_id: Uuid,
}

/// Hourly amount earned while a machine of a given model is in one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HourlyEarning {
    pub equipment_state_id: Uuid,

    #[validate(custom(function = "shared::validation::validate_hourly_rate"))]
    pub value: f64,
}

/// Equipment model (truck, harvester, grapple loader, ...) with its rate table.
///
/// The upstream rate table is keyed by operating-state id. It is resolved
/// into a [`RateTable`](super::earnings::RateTable) against the state catalog
/// when earnings are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentModel {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub hourly_earnings: Vec<HourlyEarning>,
}
