//! Domain layer for the fleet telemetry backend.
//!
//! This crate contains:
//! - Domain models (Equipment, EquipmentModel, EquipmentState, histories, facilities)
//! - The aggregation and analytics services that turn a telemetry snapshot
//!   into consolidated, queryable equipment records
//! - Domain error types

pub mod errors;
pub mod models;
pub mod services;

pub use errors::AggregationError;
pub use services::FleetView;
