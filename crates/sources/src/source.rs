//! The telemetry source abstraction.

use async_trait::async_trait;
use domain::models::{
    Collection, Equipment, EquipmentModel, EquipmentState, MaintenanceFacility, PositionHistory,
    StateHistory,
};

use crate::error::SourceError;

/// Upstream resource name of a collection, shared by the file and HTTP
/// sources (`<name>.json`).
pub fn resource_name(collection: Collection) -> &'static str {
    match collection {
        Collection::Equipment => "equipment",
        Collection::EquipmentModels => "equipmentModel",
        Collection::EquipmentStates => "equipmentState",
        Collection::StateHistory => "equipmentStateHistory",
        Collection::PositionHistory => "equipmentPositionHistory",
        Collection::MaintenanceFacilities => "maintenanceFacility",
    }
}

/// Provider of the raw input collections of an aggregation cycle.
///
/// Each fetch is independent; callers run them concurrently.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn fetch_equipment(&self) -> Result<Vec<Equipment>, SourceError>;

    async fn fetch_models(&self) -> Result<Vec<EquipmentModel>, SourceError>;

    async fn fetch_states(&self) -> Result<Vec<EquipmentState>, SourceError>;

    async fn fetch_state_history(&self) -> Result<Vec<StateHistory>, SourceError>;

    async fn fetch_position_history(&self) -> Result<Vec<PositionHistory>, SourceError>;

    async fn fetch_facilities(&self) -> Result<Vec<MaintenanceFacility>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resource_names_are_distinct() {
        let names: HashSet<_> = Collection::ALL.into_iter().map(resource_name).collect();
        assert_eq!(names.len(), Collection::ALL.len());
        assert_eq!(resource_name(Collection::StateHistory), "equipmentStateHistory");
    }
}
