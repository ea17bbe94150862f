//! Domain error types.

use thiserror::Error;

use crate::models::Collection;

/// Fatal failure of an aggregation cycle.
///
/// Missing catalog entries, empty timelines and undefined ratios are never
/// errors; they degrade individual fields of a record instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Failed to fetch {collection}: {reason}")]
    FetchFailure {
        collection: Collection,
        reason: String,
    },
}

impl AggregationError {
    pub fn fetch_failure(collection: Collection, reason: impl Into<String>) -> Self {
        Self::FetchFailure {
            collection,
            reason: reason.into(),
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            Self::FetchFailure { collection, .. } => *collection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_display() {
        let err = AggregationError::fetch_failure(Collection::StateHistory, "timed out");
        assert_eq!(err.to_string(), "Failed to fetch state_history: timed out");
        assert_eq!(err.collection(), Collection::StateHistory);
    }
}
