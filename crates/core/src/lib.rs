mod consumption;
mod stats;
mod validation;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use consumption::{changed_consumptions, recalculate, recalculate_in_place};
pub use stats::{
    ConsumptionPoint, ConsumptionStats, MonthlySpend, compute_stats, consumption_series,
    history_order, latest_odometer, monthly_spend, previous_odometer,
};
pub use validation::{ValidationError, validate_edit, validate_new};

/// One refueling event for one owner.
///
/// `volume` is derived from `total_cost / price_per_unit_volume` and
/// `consumption` is only ever written by [`recalculate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelingRecord {
    pub id: String,
    pub owner_id: String,
    pub date: NaiveDate,
    pub odometer: f64,
    pub price_per_unit_volume: f64,
    pub total_cost: f64,
    pub volume: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    pub consumption: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFueling {
    pub date: NaiveDate,
    pub odometer: f64,
    pub price_per_unit_volume: f64,
    pub total_cost: f64,
    #[serde(default)]
    pub station: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelingEdit {
    pub id: String,
    pub date: NaiveDate,
    pub odometer: f64,
    pub price_per_unit_volume: f64,
    pub total_cost: f64,
    #[serde(default)]
    pub station: Option<String>,
}

impl FuelingRecord {
    pub fn from_new(id: impl Into<String>, owner_id: impl Into<String>, input: NewFueling) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            date: input.date,
            odometer: input.odometer,
            price_per_unit_volume: input.price_per_unit_volume,
            total_cost: input.total_cost,
            volume: derive_volume(input.total_cost, input.price_per_unit_volume),
            station: normalize_station(input.station),
            consumption: None,
        }
    }

    /// Replaces the editable fields and clears the derived consumption until
    /// the next recalculation.
    pub fn apply_edit(&mut self, edit: &FuelingEdit) {
        self.date = edit.date;
        self.odometer = edit.odometer;
        self.price_per_unit_volume = edit.price_per_unit_volume;
        self.total_cost = edit.total_cost;
        self.volume = derive_volume(edit.total_cost, edit.price_per_unit_volume);
        self.station = normalize_station(edit.station.clone());
        self.consumption = None;
    }
}

/// Per-owner overview as listed by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummary {
    pub owner_id: String,
    pub record_count: u64,
    pub latest_odometer: f64,
}

pub fn derive_volume(total_cost: f64, price_per_unit_volume: f64) -> f64 {
    if price_per_unit_volume <= 0.0 {
        return 0.0;
    }
    let volume = total_cost / price_per_unit_volume;
    if volume.is_finite() { volume } else { 0.0 }
}

pub fn normalize_station(value: Option<String>) -> Option<String> {
    value.and_then(|station| {
        let trimmed = station.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
}
