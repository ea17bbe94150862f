//! HTTP source.
//!
//! Fetches `<base_url>/<resource>.json` for each collection.

use std::time::Duration;

use async_trait::async_trait;
use domain::models::{
    Collection, Equipment, EquipmentModel, EquipmentState, MaintenanceFacility, PositionHistory,
    StateHistory,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::SourceError;
use crate::source::{resource_name, TelemetrySource};

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Create a new HTTP source with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn url_for(&self, collection: Collection) -> String {
        format!(
            "{}/{}.json",
            self.base_url.trim_end_matches('/'),
            resource_name(collection)
        )
    }

    async fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, SourceError> {
        let url = self.url_for(collection);
        debug!(collection = %collection, url = %url, "Fetching collection");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SourceError::Http { collection, source })?;

        let status = response.status();
        if !status.is_success() {
            warn!(collection = %collection, status = %status, "Upstream rejected fetch");
            return Err(SourceError::Status {
                collection,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| SourceError::Http { collection, source })?;

        serde_json::from_slice(&bytes).map_err(|source| SourceError::Decode { collection, source })
    }
}

#[async_trait]
impl TelemetrySource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
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
