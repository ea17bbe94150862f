//! Source fetch metrics.
//!
//! Provides functions for recording fetch and aggregation metrics.

use std::time::Instant;

use domain::models::Collection;
use metrics::{counter, gauge, histogram};

/// Record the duration of one collection fetch.
pub fn record_fetch_duration(collection: Collection, outcome: &'static str, duration_secs: f64) {
    histogram!(
        "source_fetch_duration_seconds",
        "collection" => collection.as_str(),
        "outcome" => outcome
    )
    .record(duration_secs);
}

/// Record the outcome of one aggregation cycle.
pub fn record_cycle(outcome: &'static str) {
    counter!("aggregation_cycles_total", "outcome" => outcome).increment(1);
}

/// Record the size of the consolidated equipment set.
pub fn record_fleet_size(equipment: usize) {
    gauge!("fleet_equipment_total").set(equipment as f64);
}

/// A helper to time a collection fetch and record metrics.
///
/// A timer dropped without [`FetchTimer::record`] records its elapsed time
/// with outcome `cancelled`. This covers fetches abandoned by the fetch
/// barrier after another collection failed.
///
/// Usage:
/// ```ignore
/// let timer = FetchTimer::new(Collection::Equipment);
/// let result = source.fetch_equipment().await;
/// timer.record(result.is_ok());
/// result
/// ```
pub struct FetchTimer {
    collection: Collection,
    start: Instant,
    recorded: bool,
}

impl FetchTimer {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            start: Instant::now(),
            recorded: false,
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Record the elapsed duration to metrics.
    pub fn record(mut self, success: bool) {
        self.finish(if success { "success" } else { "failure" });
    }

    fn finish(&mut self, outcome: &'static str) {
        if !self.recorded {
            self.recorded = true;
            record_fetch_duration(self.collection, outcome, self.start.elapsed().as_secs_f64());
        }
    }
}

impl Drop for FetchTimer {
    fn drop(&mut self) {
        self.finish("cancelled");
    }
}
