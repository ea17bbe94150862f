//! JSON directory source.
//!
//! Reads one `<resource>.json` document per collection from a data
//! directory. Each document is a JSON array of records.

use std::path::PathBuf;

use async_trait::async_trait;
use domain::models::{
    Collection, Equipment, EquipmentModel, EquipmentState, MaintenanceFacility, PositionHistory,
    StateHistory,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::SourceError;
use crate::source::{resource_name, TelemetrySource};

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    data_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.data_dir
            .join(format!("{}.json", resource_name(collection)))
    }

    async fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, SourceError> {
        let path = self.path_for(collection);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| SourceError::Io {
                collection,
                path: path.clone(),
                source,
            })?;

        let records: Vec<T> = serde_json::from_slice(&bytes)
            .map_err(|source| SourceError::Decode { collection, source })?;

        debug!(
            collection = %collection,
            path = %path.display(),
            records = records.len(),
            "Loaded collection from file"
        );
        Ok(records)
    }
}

#[async_trait]
impl TelemetrySource for JsonFileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch_equipment(&self) -> Result<Vec<Equipment>, SourceError> {
        self.load(Collection::Equipment).await
    }

    async fn fetch_models(&self) -> Result<Vec<EquipmentModel>, SourceError> {
        self.load(Collection::EquipmentModels).await
    }

    async fn fetch_states(&self) -> Result<Vec<EquipmentState>, SourceError> {
        self.load(Collection::EquipmentStates).await
    }

    async fn fetch_state_history(&self) -> Result<Vec<StateHistory>, SourceError> {
        self.load(Collection::StateHistory).await
    }

    async fn fetch_position_history(&self) -> Result<Vec<PositionHistory>, SourceError> {
        self.load(Collection::PositionHistory).await
    }

    async fn fetch_facilities(&self) -> Result<Vec<MaintenanceFacility>, SourceError> {
        self.load(Collection::MaintenanceFacilities).await
    }
}
