use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use sources::{HttpSource, JsonFileSource, TelemetrySource};

use crate::config::{Config, SourceConfig};
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{equipment, facilities, health, refresh};
use crate::services::FleetCache;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fleet: Arc<FleetCache>,
}

/// Build the telemetry source selected by configuration.
pub fn build_source(config: &SourceConfig) -> Result<Arc<dyn TelemetrySource>, reqwest::Error> {
    match config.kind.as_str() {
        "http" => Ok(Arc::new(HttpSource::new(
            config.base_url.clone(),
            config.timeout_ms,
        )?)),
        _ => Ok(Arc::new(JsonFileSource::new(config.data_dir.clone()))),
    }
}

pub fn create_app(config: Config, fleet: Arc<FleetCache>) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        config: config.clone(),
        fleet,
    };

    // Empty origin list allows any origin (development)
    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let api_routes = Router::new()
        .nest("/api/v1/equipment", equipment::router())
        .nest("/api/v1/facilities", facilities::router())
        .route("/api/v1/refresh", post(refresh::trigger_refresh));

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
