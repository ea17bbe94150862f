//! Timeline reduction over unordered, timestamped events.
//!
//! Input order is never trusted. Where two events share a timestamp the one
//! seen first in input order wins, so results are reproducible for a given
//! input sequence.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{EquipmentTimeline, Timestamped};

/// Latest event by timestamp, or `None` for an empty timeline.
///
/// Single left-to-right scan; an event replaces the running maximum only
/// when strictly newer, so the first of several equal maxima is kept.
pub fn latest<T: Timestamped>(events: &[T]) -> Option<&T> {
    let mut best: Option<&T> = None;
    for event in events {
        match best {
            Some(current) if event.timestamp() <= current.timestamp() => {}
            _ => best = Some(event),
        }
    }
    best
}

/// Events sorted oldest first. The sort is stable: equal timestamps keep
/// their input order.
pub fn chronological<T: Timestamped>(events: &[T]) -> Vec<&T> {
    let mut ordered: Vec<&T> = events.iter().collect();
    ordered.sort_by_key(|event| event.timestamp());
    ordered
}

/// A closed interval opened by `event` and closed by its successor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<'a, T> {
    pub event: &'a T,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl<T> Interval<'_, T> {
    pub fn hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / MILLIS_PER_HOUR
    }
}

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Consecutive intervals of a timeline, in chronological order.
///
/// Each event opens an interval closed by the next event. The final event
/// has no successor; its open-ended interval is not emitted.
pub fn intervals<T: Timestamped>(events: &[T]) -> Vec<Interval<'_, T>> {
    chronological(events)
        .windows(2)
        .map(|pair| Interval {
            event: pair[0],
            start: pair[0].timestamp(),
            end: pair[1].timestamp(),
        })
        .collect()
}

/// Index per-equipment histories by equipment id.
///
/// When an equipment appears in several history entries, the first entry
/// wins.
pub fn index_by_equipment<H: EquipmentTimeline>(histories: &[H]) -> HashMap<Uuid, &[H::Event]> {
    let mut index = HashMap::with_capacity(histories.len());
    for history in histories {
        index
            .entry(history.equipment_id())
            .or_insert_with(|| history.events());
    }
    index
}

/// Events of one equipment, empty when it has no history entry.
pub fn events_for<H: EquipmentTimeline>(histories: &[H], equipment_id: Uuid) -> &[H::Event] {
    histories
        .iter()
        .find(|history| history.equipment_id() == equipment_id)
        .map(|history| history.events())
        .unwrap_or(&[])
}
