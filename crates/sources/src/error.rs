//! Source error types.

use std::path::PathBuf;

use domain::models::Collection;
use domain::AggregationError;
use thiserror::Error;

/// Failure to fetch one upstream collection.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {collection} from {}: {source}", path.display())]
    Io {
        collection: Collection,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {collection}: {source}")]
    Decode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP error fetching {collection}: {source}")]
    Http {
        collection: Collection,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream returned HTTP {status} for {collection}")]
    Status { collection: Collection, status: u16 },

    #[error("{collection} is unavailable: {reason}")]
    Unavailable {
        collection: Collection,
        reason: String,
    },
}

impl SourceError {
    pub fn unavailable(collection: Collection, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            collection,
            reason: reason.into(),
        }
    }

    /// The collection whose fetch failed.
    pub fn collection(&self) -> Collection {
        match self {
            Self::Io { collection, .. }
            | Self::Decode { collection, .. }
            | Self::Http { collection, .. }
            | Self::Status { collection, .. }
            | Self::Unavailable { collection, .. } => *collection,
        }
    }
}

impl From<SourceError> for AggregationError {
    fn from(err: SourceError) -> Self {
        let reason = match &err {
            SourceError::Io { source, .. } => source.to_string(),
            SourceError::Decode { source, .. } => source.to_string(),
            SourceError::Http { source, .. } => source.to_string(),
            SourceError::Status { status, .. } => format!("HTTP {}", status),
            SourceError::Unavailable { reason, .. } => reason.clone(),
        };
        AggregationError::fetch_failure(err.collection(), reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_is_carried() {
        let err = SourceError::Status {
            collection: Collection::PositionHistory,
            status: 502,
        };
        assert_eq!(err.collection(), Collection::PositionHistory);
        assert_eq!(
            err.to_string(),
            "Upstream returned HTTP 502 for position_history"
        );
    }

    #[test]
    fn test_into_aggregation_error() {
        let err = SourceError::unavailable(Collection::EquipmentStates, "connection refused");
        let aggregation: AggregationError = err.into();
        assert_eq!(
            aggregation,
            AggregationError::fetch_failure(Collection::EquipmentStates, "connection refused")
        );
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = SourceError::Io {
            collection: Collection::Equipment,
            path: PathBuf::from("/data/equipment.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.contains("/data/equipment.json"));
        assert!(message.contains("equipment"));
    }
}
