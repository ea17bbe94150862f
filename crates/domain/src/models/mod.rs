//! Domain models for the fleet telemetry backend.

pub mod consolidated;
pub mod earnings;
pub mod equipment;
pub mod equipment_state;
pub mod facility;
pub mod filter;
pub mod fleet;
pub mod history;
pub mod snapshot;

pub use consolidated::{ConsolidatedEquipment, CurrentState};
pub use earnings::{EarningsSummary, Productivity, RateTable};
pub use equipment::{Equipment, EquipmentModel, HourlyEarning};
pub use equipment_state::{EquipmentState, StateCategory};
pub use facility::{GeoPoint, MaintenanceFacility};
pub use filter::{EquipmentQuery, FilterCriteria, QueryResult};
pub use fleet::{EquipmentDetail, FleetFacets, FleetSummary, NearestFacility, StateHistoryEntry};
pub use history::{
    EquipmentTimeline, PositionEvent, PositionHistory, StateEvent, StateHistory, Timestamped,
};
pub use snapshot::{Collection, TelemetrySnapshot};
