use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use fleet_telemetry_api::{
    app,
    config::Config,
    jobs::{JobScheduler, RefreshFleetJob},
    middleware,
    services::FleetCache,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        source = %config.source.kind,
        "Starting fleet telemetry service"
    );

    let source = app::build_source(&config.source)?;
    let fleet = Arc::new(FleetCache::new(source));

    // Serve even if the first cycle fails; readiness stays 503 until one succeeds.
    if let Err(e) = fleet.refresh().await {
        warn!(error = %e, "Initial aggregation failed");
    }

    let mut scheduler = JobScheduler::new();
    if config.refresh.interval_secs > 0 {
        scheduler.register(RefreshFleetJob::new(
            Arc::clone(&fleet),
            config.refresh.interval_secs,
        ));
    } else {
        info!("Background refresh disabled");
    }
    scheduler.start();

    let addr = config.socket_addr()?;
    let router = app::create_app(config, fleet);

    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown();
    scheduler.wait_for_shutdown(Duration::from_secs(10)).await;
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
