//! Periodic fleet aggregation job.

use std::sync::Arc;
use std::time::Duration;

use super::scheduler::Job;
use crate::services::FleetCache;

/// Re-runs the aggregation cycle and swaps the cached fleet view.
///
/// A failed cycle is reported as a job failure; the cache keeps serving the
/// previous view.
pub struct RefreshFleetJob {
    cache: Arc<FleetCache>,
    interval: Duration,
}

impl RefreshFleetJob {
    pub fn new(cache: Arc<FleetCache>, interval_secs: u64) -> Self {
        Self {
            cache,
            interval: Duration::from_secs(interval_secs),
        }
    }
}

#[async_trait::async_trait]
impl Job for RefreshFleetJob {
    fn name(&self) -> &'static str {
        "refresh_fleet"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn execute(&self) -> Result<(), String> {
        self.cache
            .refresh()
            .await
            .map(|_| ())
            .map_err(|e| format!("Failed to refresh fleet: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::{Collection, TelemetrySnapshot};
    use sources::StaticSource;

    #[test]
    fn test_refresh_job_interval() {
        let cache = Arc::new(FleetCache::new(Arc::new(StaticSource::default())));
        let job = RefreshFleetJob::new(cache, 300);
        assert_eq!(job.name(), "refresh_fleet");
        assert_eq!(job.interval(), Duration::from_secs(300));
    }

    #[tokio::test]
    async fn test_execute_populates_cache() {
        let source = Arc::new(StaticSource::new(TelemetrySnapshot::default()));
        let cache = Arc::new(FleetCache::new(source.clone()));
        let job = RefreshFleetJob::new(Arc::clone(&cache), 60);

        job.execute().await.unwrap();
        assert!(cache.current().await.is_some());

        source.fail_on(Some(Collection::Equipment)).await;
        let err = job.execute().await.unwrap_err();
        assert!(err.contains("equipment"));
        assert!(cache.current().await.is_some());
    }
}
