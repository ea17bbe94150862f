//! Earnings calculator.
//!
//! Each state event opens an interval closed by the next event in
//! chronological order. The interval's hours are attributed to the opening
//! event's state category and priced at the model's rate for that category.

use tracing::trace;

use crate::models::{
    EarningsSummary, EquipmentModel, EquipmentState, Productivity, RateTable, StateCategory,
    StateEvent,
};
use crate::services::catalog_index::CatalogIndex;
use crate::services::timeline::intervals;

/// Compute hours per category, total earnings and productivity for one
/// equipment.
///
/// A missing model zero-rates every category; hours are still reported.
/// Fewer than two events yield an all-zero summary with no productivity.
pub fn compute_earnings(
    model: Option<&EquipmentModel>,
    history: &[StateEvent],
    states: &[EquipmentState],
) -> EarningsSummary {
    let catalog = CatalogIndex::build(&[], states);
    let rates = model
        .map(|model| catalog.rate_table(model))
        .unwrap_or_default();
    summarize(&catalog, rates, history)
}

/// Same as [`compute_earnings`] against a prebuilt catalog index.
pub fn compute_with_index(
    catalog: &CatalogIndex<'_>,
    model: Option<&EquipmentModel>,
    history: &[StateEvent],
) -> EarningsSummary {
    let rates = model
        .map(|model| catalog.rate_table(model))
        .unwrap_or_default();
    summarize(catalog, rates, history)
}

fn summarize(catalog: &CatalogIndex<'_>, rates: RateTable, history: &[StateEvent]) -> EarningsSummary {
    let mut summary = EarningsSummary {
        rates,
        ..EarningsSummary::default()
    };

    for interval in intervals(history) {
        let hours = interval.hours();
        let Some(category) = catalog.category(&interval.event.equipment_state_id) else {
            summary.hours_unclassified += hours;
            continue;
        };
        match category {
            StateCategory::Working => summary.hours_worked += hours,
            StateCategory::Idle => summary.hours_idle += hours,
            StateCategory::Maintenance => summary.hours_maintenance += hours,
        }
        summary.total_earnings += hours * rates.rate(category);
    }

    summary.productivity = Productivity::from_hours(
        summary.hours_worked,
        summary.hours_idle,
        summary.hours_maintenance,
    );

    trace!(
        events = history.len(),
        hours = summary.total_hours(),
        total_earnings = summary.total_earnings,
        "Computed earnings"
    );

    summary
}
