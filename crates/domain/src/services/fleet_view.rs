//! Result of one aggregation cycle.
//!
//! A `FleetView` owns the snapshot it was built from together with the
//! consolidated records, so per-equipment analytics can be answered on
//! demand without refetching. It is immutable once built.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{
    ConsolidatedEquipment, EarningsSummary, EquipmentDetail, FilterCriteria, FleetFacets,
    FleetSummary, GeoPoint, MaintenanceFacility, NearestFacility, PositionEvent, QueryResult,
    StateHistoryEntry, TelemetrySnapshot,
};
use crate::services::catalog_index::CatalogIndex;
use crate::services::timeline::events_for;
use crate::services::{consolidation, earnings, facility_locator, filter_search, state_history};

#[derive(Debug, Clone)]
pub struct FleetView {
    snapshot: TelemetrySnapshot,
    records: Vec<ConsolidatedEquipment>,
    aggregated_at: DateTime<Utc>,
}

impl FleetView {
    /// Consolidate a snapshot.
    pub fn new(snapshot: TelemetrySnapshot) -> Self {
        let records = consolidation::consolidate_snapshot(&snapshot);
        Self {
            snapshot,
            records,
            aggregated_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[ConsolidatedEquipment] {
        &self.records
    }

    pub fn snapshot(&self) -> &TelemetrySnapshot {
        &self.snapshot
    }

    pub fn aggregated_at(&self) -> DateTime<Utc> {
        self.aggregated_at
    }

    pub fn record(&self, equipment_id: Uuid) -> Option<&ConsolidatedEquipment> {
        self.records.iter().find(|record| record.id == equipment_id)
    }

    pub fn query(&self, criteria: &FilterCriteria) -> QueryResult {
        filter_search::apply(&self.records, criteria)
    }

    /// Earnings of one equipment; `None` when the id is not in the fleet.
    pub fn earnings_for(&self, equipment_id: Uuid) -> Option<EarningsSummary> {
        let equipment = self
            .snapshot
            .equipment
            .iter()
            .find(|item| item.id == equipment_id)?;
        let catalog = self.catalog();
        let model = catalog.model(&equipment.equipment_model_id);
        let history = events_for(&self.snapshot.state_history, equipment_id);
        Some(earnings::compute_with_index(&catalog, model, history))
    }

    pub fn nearest_facility_to(&self, point: GeoPoint) -> Option<&MaintenanceFacility> {
        facility_locator::nearest(point, &self.snapshot.facilities)
    }

    pub fn nearest_facility_with_distance(&self, point: GeoPoint) -> Option<NearestFacility> {
        facility_locator::nearest_with_distance(point, &self.snapshot.facilities)
    }

    /// Resolved state history, newest first. `None` for unknown equipment.
    pub fn state_history_for(&self, equipment_id: Uuid) -> Option<Vec<StateHistoryEntry>> {
        self.record(equipment_id)?;
        Some(state_history::state_history_for(
            &self.catalog(),
            &self.snapshot.state_history,
            equipment_id,
        ))
    }

    /// Position fixes, oldest first. `None` for unknown equipment.
    pub fn position_trail_for(&self, equipment_id: Uuid) -> Option<Vec<PositionEvent>> {
        self.record(equipment_id)?;
        Some(state_history::position_trail_for(
            &self.snapshot.position_history,
            equipment_id,
        ))
    }

    /// Record, earnings and nearest facility of one equipment.
    pub fn detail_for(&self, equipment_id: Uuid) -> Option<EquipmentDetail> {
        let equipment = self.record(equipment_id)?.clone();
        let earnings = self.earnings_for(equipment_id)?;
        let nearest_facility = equipment
            .position
            .and_then(|point| self.nearest_facility_with_distance(point));
        Some(EquipmentDetail {
            equipment,
            earnings,
            nearest_facility,
        })
    }

    /// Sorted distinct state and model names present in the records.
    pub fn facets(&self) -> FleetFacets {
        let mut states: Vec<String> = self
            .records
            .iter()
            .filter_map(|record| record.state.name.clone())
            .collect();
        states.sort();
        states.dedup();

        let mut models: Vec<String> = self
            .records
            .iter()
            .filter_map(|record| record.model_name.clone())
            .collect();
        models.sort();
        models.dedup();

        FleetFacets { states, models }
    }

    pub fn summary(&self) -> FleetSummary {
        FleetSummary {
            equipment: self.records.len(),
            with_position: self.records.iter().filter(|r| r.position.is_some()).count(),
            with_state: self.records.iter().filter(|r| r.state.id.is_some()).count(),
            facilities: self.snapshot.facilities.len(),
            aggregated_at: Some(self.aggregated_at),
        }
    }

    fn catalog(&self) -> CatalogIndex<'_> {
        CatalogIndex::build(&self.snapshot.models, &self.snapshot.states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Equipment, EquipmentModel, EquipmentState, HourlyEarning, PositionHistory, Productivity,
        StateEvent, StateHistory,
    };
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 2, 1, hour, 0, 0).unwrap()
    }

    fn snapshot() -> TelemetrySnapshot {
        let operating = EquipmentState {
            id: Uuid::new_v4(),
            name: "Operando".to_string(),
            color: "#2ecc71".to_string(),
        };
        let stopped = EquipmentState {
            id: Uuid::new_v4(),
            name: "Parado".to_string(),
            color: "#f1c40f".to_string(),
        };
        let truck = EquipmentModel {
            id: Uuid::new_v4(),
            name: "Caminhão de carga".to_string(),
            hourly_earnings: vec![
                HourlyEarning {
                    equipment_state_id: operating.id,
                    value: 100.0,
                },
                HourlyEarning {
                    equipment_state_id: stopped.id,
                    value: -5.0,
                },
            ],
        };
        let harvester = EquipmentModel {
            id: Uuid::new_v4(),
            name: "Harvester".to_string(),
            hourly_earnings: vec![],
        };
        let equipment = vec![
            Equipment {
                id: Uuid::new_v4(),
                name: "CA-0001".to_string(),
                equipment_model_id: truck.id,
            },
            Equipment {
                id: Uuid::new_v4(),
                name: "HV-1000".to_string(),
                equipment_model_id: harvester.id,
            },
        ];
        let state_history = vec![StateHistory {
            equipment_id: equipment[0].id,
            states: vec![
                StateEvent {
                    date: at(0),
                    equipment_state_id: operating.id,
                },
                StateEvent {
                    date: at(6),
                    equipment_state_id: stopped.id,
                },
                StateEvent {
                    date: at(8),
                    equipment_state_id: operating.id,
                },
            ],
        }];
        let position_history = vec![PositionHistory {
            equipment_id: equipment[0].id,
            positions: vec![crate::models::PositionEvent {
                date: at(8),
                lat: -19.15,
                lon: -45.95,
                equipment_state_id: None,
            }],
        }];
        let facilities = vec![
            MaintenanceFacility {
                id: Uuid::new_v4(),
                name: "Oficina Norte".to_string(),
                lat: -19.1,
                lon: -45.9,
            },
            MaintenanceFacility {
                id: Uuid::new_v4(),
                name: "Oficina Sul".to_string(),
                lat: -21.0,
                lon: -47.0,
            },
        ];

        TelemetrySnapshot {
            equipment,
            models: vec![truck, harvester],
            states: vec![operating, stopped],
            state_history,
            position_history,
            facilities,
        }
    }

    #[test]
    fn test_records_and_summary() {
        let view = FleetView::new(snapshot());
        assert_eq!(view.records().len(), 2);

        let summary = view.summary();
        assert_eq!(summary.equipment, 2);
        assert_eq!(summary.with_position, 1);
        assert_eq!(summary.with_state, 1);
        assert_eq!(summary.facilities, 2);
        assert_eq!(summary.aggregated_at, Some(view.aggregated_at()));
    }

    #[test]
    fn test_earnings_for_known_and_unknown() {
        let view = FleetView::new(snapshot());
        let id = view.records()[0].id;

        let earnings = view.earnings_for(id).unwrap();
        assert_eq!(earnings.hours_worked, 6.0);
        assert_eq!(earnings.hours_idle, 2.0);
        assert_eq!(earnings.total_earnings, 590.0);
        assert_eq!(earnings.productivity, Productivity::Percentage(75.0));

        let no_history = view.earnings_for(view.records()[1].id).unwrap();
        assert_eq!(no_history.productivity, Productivity::NoData);

        assert!(view.earnings_for(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_detail_includes_nearest_facility() {
        let view = FleetView::new(snapshot());
        let detail = view.detail_for(view.records()[0].id).unwrap();
        let nearest = detail.nearest_facility.unwrap();
        assert_eq!(nearest.facility.name, "Oficina Norte");
        assert!(nearest.distance_meters > 0.0);

        let without_position = view.detail_for(view.records()[1].id).unwrap();
        assert!(without_position.nearest_facility.is_none());
        assert!(view.detail_for(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_histories() {
        let view = FleetView::new(snapshot());
        let id = view.records()[0].id;

        let history = view.state_history_for(id).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].date, at(8));

        let trail = view.position_trail_for(id).unwrap();
        assert_eq!(trail.len(), 1);

        assert_eq!(view.position_trail_for(view.records()[1].id), Some(vec![]));
        assert!(view.state_history_for(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_query_and_facets() {
        let view = FleetView::new(snapshot());
        let result = view.query(&FilterCriteria::new().with_state("Operando").with_search("hv"));
        assert_eq!(result.filtered.len(), 1);
        assert_eq!(result.filtered[0].name, "CA-0001");
        assert_eq!(result.search_results.len(), 1);
        assert_eq!(result.search_results[0].name, "HV-1000");

        let facets = view.facets();
        assert_eq!(facets.states, vec!["Operando".to_string()]);
        assert_eq!(
            facets.models,
            vec!["Caminhão de carga".to_string(), "Harvester".to_string()]
        );
    }

    #[test]
    fn test_nearest_facility_to_point() {
        let view = FleetView::new(snapshot());
        let facility = view.nearest_facility_to(GeoPoint::new(-20.9, -46.9)).unwrap();
        assert_eq!(facility.name, "Oficina Sul");
    }
}
