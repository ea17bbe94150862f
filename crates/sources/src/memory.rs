//! In-memory source serving a fixed snapshot.
//!
//! Used by tests and local runs. A collection can be marked as failing to
//! exercise the all-or-nothing fetch barrier.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use domain::models::{
    Collection, Equipment, EquipmentModel, EquipmentState, MaintenanceFacility, PositionHistory,
    StateHistory, TelemetrySnapshot,
};
use tokio::sync::RwLock;

use crate::error::SourceError;
use crate::source::TelemetrySource;

#[derive(Debug, Default)]
pub struct StaticSource {
    snapshot: RwLock<TelemetrySnapshot>,
    failing: RwLock<Option<Collection>>,
    fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(snapshot: TelemetrySnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
            failing: RwLock::new(None),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Replace the served snapshot.
    pub async fn set_snapshot(&self, snapshot: TelemetrySnapshot) {
        *self.snapshot.write().await = snapshot;
    }

    /// Make fetches of `collection` fail, or clear the failure with `None`.
    pub async fn fail_on(&self, collection: Option<Collection>) {
        *self.failing.write().await = collection;
    }

    /// Number of collection fetches served or failed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    async fn serve<T, F>(&self, collection: Collection, select: F) -> Result<Vec<T>, SourceError>
    where
        F: FnOnce(&TelemetrySnapshot) -> Vec<T> + Send,
    {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        if *self.failing.read().await == Some(collection) {
            return Err(SourceError::unavailable(collection, "injected failure"));
        }
        let snapshot = self.snapshot.read().await;
        Ok(select(&snapshot))
    }
}

#[async_trait]
impl TelemetrySource for StaticSource {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn fetch_equipment(&self) -> Result<Vec<Equipment>, SourceError> {
        self.serve(Collection::Equipment, |s| s.equipment.clone())
            .await
    }

    async fn fetch_models(&self) -> Result<Vec<EquipmentModel>, SourceError> {
        self.serve(Collection::EquipmentModels, |s| s.models.clone())
            .await
    }

    async fn fetch_states(&self) -> Result<Vec<EquipmentState>, SourceError> {
        self.serve(Collection::EquipmentStates, |s| s.states.clone())
            .await
    }

    async fn fetch_state_history(&self) -> Result<Vec<StateHistory>, SourceError> {
        self.serve(Collection::StateHistory, |s| s.state_history.clone())
            .await
    }

    async fn fetch_position_history(&self) -> Result<Vec<PositionHistory>, SourceError> {
        self.serve(Collection::PositionHistory, |s| s.position_history.clone())
            .await
    }

    async fn fetch_facilities(&self) -> Result<Vec<MaintenanceFacility>, SourceError> {
        self.serve(Collection::MaintenanceFacilities, |s| s.facilities.clone())
            .await
    }
}
