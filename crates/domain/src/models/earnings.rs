//! Earnings and utilization figures derived from a state-history timeline.

use serde::{Deserialize, Serialize};

use super::equipment_state::StateCategory;

/// Hourly rates of one equipment model, resolved per state category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    pub working: f64,
    pub idle: f64,
    pub maintenance: f64,
}

impl RateTable {
    pub fn rate(&self, category: StateCategory) -> f64 {
        match category {
            StateCategory::Working => self.working,
            StateCategory::Idle => self.idle,
            StateCategory::Maintenance => self.maintenance,
        }
    }
}

/// Share of classified hours spent working.
///
/// `NoData` is reported when no classified hours exist, instead of a
/// division-by-zero artifact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Productivity {
    Percentage(f64),
    NoData,
}

impl Productivity {
    pub fn from_hours(worked: f64, idle: f64, maintenance: f64) -> Self {
        let total = worked + idle + maintenance;
        if total > 0.0 {
            Self::Percentage(worked / total * 100.0)
        } else {
            Self::NoData
        }
    }

    pub fn percentage(&self) -> Option<f64> {
        match self {
            Self::Percentage(value) => Some(*value),
            Self::NoData => None,
        }
    }
}

impl std::fmt::Display for Productivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percentage(value) => write!(f, "~{:.2}%", value),
            Self::NoData => write!(f, "no data"),
        }
    }
}

/// Hours per category, earnings and productivity for one equipment.
///
/// `hours_unclassified` holds time spent in states whose name maps to no
/// category (or whose id is not in the catalog). It earns nothing and is not
/// part of the productivity ratio. The four hour buckets sum to the span of
/// the computed intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    pub total_earnings: f64,
    pub hours_worked: f64,
    pub hours_idle: f64,
    pub hours_maintenance: f64,
    pub hours_unclassified: f64,
    pub rates: RateTable,
    pub productivity: Productivity,
}

impl EarningsSummary {
    /// Total hours covered by the computed intervals.
    pub fn total_hours(&self) -> f64 {
        self.hours_worked + self.hours_idle + self.hours_maintenance + self.hours_unclassified
    }
}

impl Default for EarningsSummary {
    fn default() -> Self {
        Self {
            total_earnings: 0.0,
            hours_worked: 0.0,
            hours_idle: 0.0,
            hours_maintenance: 0.0,
            hours_unclassified: 0.0,
            rates: RateTable::default(),
            productivity: Productivity::NoData,
        }
    }
}
