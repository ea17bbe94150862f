//! Input sanitation applied to every fetched snapshot.
//!
//! Upstream data is not trusted to respect coordinate ranges. Facilities and
//! rate entries that fail validation are dropped with a warning instead of
//! failing the cycle. Position fixes are not touched here: consolidation
//! decides what an invalid fix means for the current position.

use domain::models::TelemetrySnapshot;
use tracing::warn;
use validator::Validate;

/// Counts of records dropped from one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dropped {
    pub facilities: usize,
    pub rates: usize,
}

impl Dropped {
    pub fn total(&self) -> usize {
        self.facilities + self.rates
    }
}

/// Drop facilities with out-of-range coordinates and rate entries that are
/// not finite.
pub fn sanitize(mut snapshot: TelemetrySnapshot) -> (TelemetrySnapshot, Dropped) {
    let mut dropped = Dropped::default();

    let before = snapshot.facilities.len();
    snapshot.facilities.retain(|facility| match facility.validate() {
        Ok(()) => true,
        Err(e) => {
            warn!(facility_id = %facility.id, error = %e, "Dropped invalid maintenance facility");
            false
        }
    });
    dropped.facilities = before - snapshot.facilities.len();

    for model in &mut snapshot.models {
        let before = model.hourly_earnings.len();
        model.hourly_earnings.retain(|earning| earning.validate().is_ok());
        let removed = before - model.hourly_earnings.len();
        if removed > 0 {
            warn!(model_id = %model.id, removed, "Dropped invalid hourly rates");
        }
        dropped.rates += removed;
    }

    (snapshot, dropped)
}
