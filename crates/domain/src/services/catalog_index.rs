//! Catalog lookup maps built once per aggregation cycle.
//!
//! Lookups never fail: a missing key is `None` and callers degrade the
//! corresponding field instead of aborting.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{EquipmentModel, EquipmentState, RateTable, StateCategory};

/// O(1) lookups from model id to model and state id to state.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex<'a> {
    models: HashMap<Uuid, &'a EquipmentModel>,
    states: HashMap<Uuid, &'a EquipmentState>,
}

impl<'a> CatalogIndex<'a> {
    /// Build the index. On duplicate ids the first catalog entry wins.
    pub fn build(models: &'a [EquipmentModel], states: &'a [EquipmentState]) -> Self {
        let mut index = Self {
            models: HashMap::with_capacity(models.len()),
            states: HashMap::with_capacity(states.len()),
        };
        for model in models {
            index.models.entry(model.id).or_insert(model);
        }
        for state in states {
            index.states.entry(state.id).or_insert(state);
        }
        index
    }

    pub fn model(&self, id: &Uuid) -> Option<&'a EquipmentModel> {
        self.models.get(id).copied()
    }

    pub fn state(&self, id: &Uuid) -> Option<&'a EquipmentState> {
        self.states.get(id).copied()
    }

    /// Category of a state id, `None` if the id is unknown or unclassified.
    pub fn category(&self, state_id: &Uuid) -> Option<StateCategory> {
        self.state(state_id).and_then(EquipmentState::category)
    }

    /// Resolve a model's state-keyed rate table into per-category rates.
    ///
    /// Entries referencing unknown or unclassified states are ignored; the
    /// first entry of each category wins; categories without an entry are
    /// zero-rated.
    pub fn rate_table(&self, model: &EquipmentModel) -> RateTable {
        let mut working = None;
        let mut idle = None;
        let mut maintenance = None;

        for earning in &model.hourly_earnings {
            let slot = match self.category(&earning.equipment_state_id) {
                Some(StateCategory::Working) => &mut working,
                Some(StateCategory::Idle) => &mut idle,
                Some(StateCategory::Maintenance) => &mut maintenance,
                None => continue,
            };
            slot.get_or_insert(earning.value);
        }

        RateTable {
            working: working.unwrap_or(0.0),
            idle: idle.unwrap_or(0.0),
            maintenance: maintenance.unwrap_or(0.0),
        }
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}
