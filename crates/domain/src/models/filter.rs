//! Filter and search query models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::consolidated::ConsolidatedEquipment;

/// Transient query parameters applied over the consolidated record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Keep only records whose current state name equals this value.
    pub selected_state: Option<String>,
    /// Keep only records whose model name equals this value.
    pub selected_model: Option<String>,
    /// Free text matched against equipment names.
    #[serde(default)]
    pub search_text: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.selected_state = Some(state.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.selected_model = Some(model.into());
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }
}

/// Equipment listing query parameters.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct EquipmentQuery {
    /// Filter by current state name
    #[validate(length(max = 100))]
    pub state: Option<String>,
    /// Filter by model name
    #[validate(length(max = 100))]
    pub model: Option<String>,
    /// Search by equipment name
    #[validate(length(max = 100))]
    pub search: Option<String>,
}

impl From<EquipmentQuery> for FilterCriteria {
    fn from(query: EquipmentQuery) -> Self {
        Self {
            selected_state: query.state,
            selected_model: query.model,
            search_text: query.search.unwrap_or_default(),
        }
    }
}

/// The two independent result views of a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Records passing the state/model filters.
    pub filtered: Vec<ConsolidatedEquipment>,
    /// Records whose name matches the search text.
    pub search_results: Vec<ConsolidatedEquipment>,
}
