//! Application services.

pub mod fleet_cache;

pub use fleet_cache::{FleetCache, RefreshStatus};
