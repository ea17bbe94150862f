//! Filter and search over the consolidated record set.
//!
//! `filtered` and `search_results` are two independent views computed from
//! the full input. Filters never narrow search results and search text never
//! narrows the filtered view.

use crate::models::{ConsolidatedEquipment, FilterCriteria, QueryResult};

/// Apply state/model filters and name search.
pub fn apply(records: &[ConsolidatedEquipment], criteria: &FilterCriteria) -> QueryResult {
    let state = selected(&criteria.selected_state);
    let model = selected(&criteria.selected_model);

    let filtered = records
        .iter()
        .filter(|record| state.map_or(true, |s| record.state_name() == Some(s)))
        .filter(|record| model.map_or(true, |m| record.model_name.as_deref() == Some(m)))
        .cloned()
        .collect();

    QueryResult {
        filtered,
        search_results: search(records, &criteria.search_text),
    }
}

/// Records whose name contains `text`, ignoring case and surrounding
/// whitespace of `text`. Blank text matches nothing.
pub fn search(records: &[ConsolidatedEquipment], text: &str) -> Vec<ConsolidatedEquipment> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

// An empty selection is the same as no selection.
fn selected(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
