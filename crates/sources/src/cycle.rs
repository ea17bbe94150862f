//! Aggregation cycle: concurrent fetch barrier followed by consolidation.

use std::future::Future;
use std::time::Instant;

use domain::models::{Collection, TelemetrySnapshot};
use domain::{AggregationError, FleetView};
use tracing::{info, warn};

use crate::error::SourceError;
use crate::metrics::{record_cycle, record_fleet_size, FetchTimer};
use crate::sanitize::sanitize;
use crate::source::TelemetrySource;

/// Time one fetch. A fetch dropped by the barrier before completing is
/// recorded with outcome `cancelled` when its timer drops.
async fn timed<T, F>(collection: Collection, fetch: F) -> Result<T, SourceError>
where
    F: Future<Output = Result<T, SourceError>>,
{
    let timer = FetchTimer::new(collection);
    let result = fetch.await;
    timer.record(result.is_ok());
    result
}

/// Fetch every collection concurrently.
///
/// All-or-nothing: the first failing fetch fails the whole snapshot and the
/// remaining fetches are dropped.
pub async fn fetch_snapshot(source: &dyn TelemetrySource) -> Result<TelemetrySnapshot, SourceError> {
    let (equipment, models, states, state_history, position_history, facilities) = tokio::try_join!(
        timed(Collection::Equipment, source.fetch_equipment()),
        timed(Collection::EquipmentModels, source.fetch_models()),
        timed(Collection::EquipmentStates, source.fetch_states()),
        timed(Collection::StateHistory, source.fetch_state_history()),
        timed(Collection::PositionHistory, source.fetch_position_history()),
        timed(Collection::MaintenanceFacilities, source.fetch_facilities()),
    )?;

    let (snapshot, dropped) = sanitize(TelemetrySnapshot {
        equipment,
        models,
        states,
        state_history,
        position_history,
        facilities,
    });
    if dropped.total() > 0 {
        warn!(
            facilities = dropped.facilities,
            rates = dropped.rates,
            "Dropped invalid upstream records"
        );
    }

    Ok(snapshot)
}

/// Run one aggregation cycle against `source`.
///
/// Fails with a single [`AggregationError`] if any fetch failed; never
/// returns a partially joined view.
pub async fn aggregate(source: &dyn TelemetrySource) -> Result<FleetView, AggregationError> {
    let start = Instant::now();
    info!(source = source.name(), "Starting aggregation cycle");

    let snapshot = match fetch_snapshot(source).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            record_cycle("failure");
            warn!(
                source = source.name(),
                collection = %e.collection(),
                error = %e,
                "Aggregation cycle failed"
            );
            return Err(e.into());
        }
    };

    let view = FleetView::new(snapshot);
    let summary = view.summary();
    record_cycle("success");
    record_fleet_size(summary.equipment);

    info!(
        source = source.name(),
        equipment_count = summary.equipment,
        with_position = summary.with_position,
        with_state = summary.with_state,
        facilities = summary.facilities,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Aggregation cycle completed"
    );

    Ok(view)
}
