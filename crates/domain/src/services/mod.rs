//! Domain services for fleet telemetry.
//!
//! Every service here is a pure, synchronous computation over an immutable
//! snapshot.

pub mod catalog_index;
pub mod consolidation;
pub mod earnings;
pub mod facility_locator;
pub mod filter_search;
pub mod fleet_view;
pub mod state_history;
pub mod timeline;

pub use catalog_index::CatalogIndex;
pub use consolidation::{consolidate, consolidate_snapshot};
pub use earnings::compute_earnings;
pub use facility_locator::{distance_meters, nearest, nearest_with_distance};
pub use filter_search::apply as query;
pub use fleet_view::FleetView;
pub use timeline::{intervals, latest, Interval};
