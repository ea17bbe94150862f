//! Last-known-good fleet view cache.
//!
//! Holds the most recent successful aggregation result. A refresh builds a
//! new view off-lock and swaps it in; a failed refresh leaves the cached
//! view untouched. Readers clone the `Arc` and never hold the lock while
//! computing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::{AggregationError, FleetView};
use sources::TelemetrySource;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::error::ApiError;

/// Outcome of the most recent refresh attempt.
#[derive(Debug, Clone)]
pub struct RefreshStatus {
    pub attempted_at: DateTime<Utc>,
    pub error: Option<String>,
}

pub struct FleetCache {
    source: Arc<dyn TelemetrySource>,
    current: RwLock<Option<Arc<FleetView>>>,
    last_refresh: RwLock<Option<RefreshStatus>>,
    // Serializes refreshes so concurrent triggers do not fetch twice in parallel.
    refreshing: Mutex<()>,
}

impl FleetCache {
    pub fn new(source: Arc<dyn TelemetrySource>) -> Self {
        Self {
            source,
            current: RwLock::new(None),
            last_refresh: RwLock::new(None),
            refreshing: Mutex::new(()),
        }
    }

    /// The cached view, if any cycle has succeeded yet.
    pub async fn current(&self) -> Option<Arc<FleetView>> {
        self.current.read().await.clone()
    }

    /// The cached view, or `ServiceUnavailable` before the first success.
    pub async fn require(&self) -> Result<Arc<FleetView>, ApiError> {
        self.current().await.ok_or_else(|| {
            ApiError::ServiceUnavailable("Fleet data has not been aggregated yet".to_string())
        })
    }

    pub async fn last_refresh(&self) -> Option<RefreshStatus> {
        self.last_refresh.read().await.clone()
    }

    /// Run one aggregation cycle and swap the result in on success.
    pub async fn refresh(&self) -> Result<Arc<FleetView>, AggregationError> {
        let _guard = self.refreshing.lock().await;
        let attempted_at = Utc::now();

        match sources::aggregate(self.source.as_ref()).await {
            Ok(view) => {
                let view = Arc::new(view);
                *self.current.write().await = Some(Arc::clone(&view));
                *self.last_refresh.write().await = Some(RefreshStatus {
                    attempted_at,
                    error: None,
                });
                info!(
                    equipment_count = view.records().len(),
                    "Fleet cache updated"
                );
                Ok(view)
            }
            Err(e) => {
                let retained = self.current.read().await.is_some();
                warn!(
                    error = %e,
                    retained_previous = retained,
                    "Fleet refresh failed; keeping last known good data"
                );
                *self.last_refresh.write().await = Some(RefreshStatus {
                    attempted_at,
                    error: Some(e.to_string()),
                });
                Err(e)
            }
        }
    }
}
