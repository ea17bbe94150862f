//! Common test utilities for integration tests.
//!
//! Builds the application over an in-memory telemetry source seeded with a
//! small, fully known fleet.

// Not every helper is used by every test binary.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use chrono::{DateTime, Utc};
use domain::models::{
    Equipment, EquipmentModel, EquipmentState, HourlyEarning, MaintenanceFacility, PositionEvent,
    PositionHistory, StateEvent, StateHistory, TelemetrySnapshot,
};
use fleet_telemetry_api::{app::create_app, config::Config, services::FleetCache};
use sources::StaticSource;
use uuid::Uuid;

pub const TRUCK_1: &str = "a7c53eb1-4f5e-4eba-9764-ad205d0891f9";
pub const TRUCK_2: &str = "1c7e9615-cc1c-4d72-8496-190fe5791c8b";
pub const HARVESTER: &str = "491b983b-950c-4a88-942d-487e99b92540";

const TRUCK_MODEL: &str = "a3540227-2f0e-4362-9517-92f41dabbfdf";
const HARVESTER_MODEL: &str = "a4b0c114-acd8-4151-9449-7d12ab9bf40f";

const OPERATING: &str = "0808344c-454b-4c36-89e8-d7687e692d57";
const STOPPED: &str = "baff9783-84e8-4e01-874b-6fd743b875ad";
const MAINTENANCE: &str = "03b2d446-e3ba-4c82-8dc2-a5611fea6e1f";

pub const NORTH_FACILITY: &str = "5d4d1f5e-08f3-4b58-9a5c-6a5a8b2f6f10";
const SOUTH_FACILITY: &str = "8e2f3a4b-1c5d-4e6f-9a7b-0c1d2e3f4a5b";

/// Test configuration.
pub fn test_config() -> Config {
    Config {
        server: fleet_telemetry_api::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Use random port
            request_timeout_secs: 30,
        },
        logging: fleet_telemetry_api::config::LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        source: fleet_telemetry_api::config::SourceConfig {
            kind: "memory".to_string(),
            data_dir: String::new(),
            base_url: String::new(),
            timeout_ms: 1000,
        },
        refresh: fleet_telemetry_api::config::RefreshConfig {
            interval_secs: 0, // No background job in tests
        },
        security: fleet_telemetry_api::config::SecurityConfig {
            cors_origins: vec![],
        },
    }
}

fn id(value: &str) -> Uuid {
    value.parse().unwrap()
}

fn at(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

fn rate(state: &str, value: f64) -> HourlyEarning {
    HourlyEarning {
        equipment_state_id: id(state),
        value,
    }
}

fn state_event(date: &str, state: &str) -> StateEvent {
    StateEvent {
        date: at(date),
        equipment_state_id: id(state),
    }
}

fn fix(date: &str, lat: f64, lon: f64) -> PositionEvent {
    PositionEvent {
        date: at(date),
        lat,
        lon,
        equipment_state_id: None,
    }
}

/// Fleet of three machines.
///
/// - CA-0001 (truck): operating 00:00-10:00, stopped 10:00-12:00, then in
///   maintenance from 12:00. Last fix near the north facility.
/// - HV-1000 (harvester): a single stopped event, so no closed intervals.
/// - CA-0002 (truck): no state or position history at all.
pub fn fleet_snapshot() -> TelemetrySnapshot {
    TelemetrySnapshot {
        equipment: vec![
            Equipment {
                id: id(TRUCK_1),
                name: "CA-0001".to_string(),
                equipment_model_id: id(TRUCK_MODEL),
            },
            Equipment {
                id: id(HARVESTER),
                name: "HV-1000".to_string(),
                equipment_model_id: id(HARVESTER_MODEL),
            },
            Equipment {
                id: id(TRUCK_2),
                name: "CA-0002".to_string(),
                equipment_model_id: id(TRUCK_MODEL),
            },
        ],
        models: vec![
            EquipmentModel {
                id: id(TRUCK_MODEL),
                name: "Caminhão de carga".to_string(),
                hourly_earnings: vec![
                    rate(OPERATING, 100.0),
                    rate(STOPPED, -5.0),
                    rate(MAINTENANCE, -20.0),
                ],
            },
            EquipmentModel {
                id: id(HARVESTER_MODEL),
                name: "Harvester".to_string(),
                hourly_earnings: vec![
                    rate(OPERATING, 200.0),
                    rate(STOPPED, -10.0),
                    rate(MAINTENANCE, -50.0),
                ],
            },
        ],
        states: vec![
            EquipmentState {
                id: id(OPERATING),
                name: "Operando".to_string(),
                color: "#2ecc71".to_string(),
            },
            EquipmentState {
                id: id(STOPPED),
                name: "Parado".to_string(),
                color: "#f1c40f".to_string(),
            },
            EquipmentState {
                id: id(MAINTENANCE),
                name: "Manutenção".to_string(),
                color: "#e74c3c".to_string(),
            },
        ],
        state_history: vec![
            StateHistory {
                equipment_id: id(TRUCK_1),
                // Deliberately out of order
                states: vec![
                    state_event("2021-02-01T10:00:00Z", STOPPED),
                    state_event("2021-02-01T00:00:00Z", OPERATING),
                    state_event("2021-02-01T12:00:00Z", MAINTENANCE),
                ],
            },
            StateHistory {
                equipment_id: id(HARVESTER),
                states: vec![state_event("2021-02-01T08:00:00Z", STOPPED)],
            },
        ],
        position_history: vec![
            PositionHistory {
                equipment_id: id(TRUCK_1),
                positions: vec![
                    fix("2021-02-01T12:00:00Z", -19.1, -46.0),
                    fix("2021-02-01T00:00:00Z", -19.3, -46.2),
                ],
            },
            PositionHistory {
                equipment_id: id(HARVESTER),
                positions: vec![fix("2021-02-01T08:00:00Z", -19.85, -46.45)],
            },
        ],
        facilities: vec![
            MaintenanceFacility {
                id: id(NORTH_FACILITY),
                name: "Posto Norte".to_string(),
                lat: -19.05,
                lon: -45.95,
            },
            MaintenanceFacility {
                id: id(SOUTH_FACILITY),
                name: "Posto Sul".to_string(),
                lat: -19.9,
                lon: -46.5,
            },
        ],
    }
}

/// Application plus handles to its source and cache. Nothing is aggregated yet.
pub struct TestApp {
    pub router: Router,
    pub source: Arc<StaticSource>,
    pub fleet: Arc<FleetCache>,
}

/// Create a test application serving `snapshot`, without aggregating it.
pub fn create_test_app(snapshot: TelemetrySnapshot) -> TestApp {
    let source = Arc::new(StaticSource::new(snapshot));
    let fleet = Arc::new(FleetCache::new(source.clone()));
    let router = create_app(test_config(), fleet.clone());
    TestApp {
        router,
        source,
        fleet,
    }
}

/// Create a test application over the standard fleet with one completed
/// aggregation cycle.
pub async fn create_ready_app() -> TestApp {
    let app = create_test_app(fleet_snapshot());
    app.fleet
        .refresh()
        .await
        .expect("initial aggregation should succeed");
    app
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Parse response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::json!({}))
}
