use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::FuelingRecord;

/// Aggregates over an already recalculated record set. Every field is finite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionStats {
    pub average_consumption: f64,
    pub total_spend: f64,
    pub total_volume: f64,
    pub total_distance: f64,
    pub record_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySpend {
    pub month: String,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionPoint {
    pub date: NaiveDate,
    pub odometer: f64,
    pub consumption: f64,
}

pub fn compute_stats(records: &[FuelingRecord]) -> ConsumptionStats {
    let total_spend: f64 = records.iter().map(|record| record.total_cost).sum();
    let total_volume: f64 = records.iter().map(|record| record.volume).sum();

    let valid: Vec<f64> = records
        .iter()
        .filter_map(|record| record.consumption)
        .filter(|value| value.is_finite() && *value > 0.0)
        .collect();
    let average_consumption = if valid.is_empty() {
        0.0
    } else {
        valid.iter().sum::<f64>() / valid.len() as f64
    };

    let total_distance = if records.len() < 2 {
        0.0
    } else {
        let min = records
            .iter()
            .map(|record| record.odometer)
            .fold(f64::INFINITY, f64::min);
        let max = records
            .iter()
            .map(|record| record.odometer)
            .fold(f64::NEG_INFINITY, f64::max);
        max - min
    };

    ConsumptionStats {
        average_consumption: finite_or_zero(average_consumption),
        total_spend: finite_or_zero(total_spend),
        total_volume: finite_or_zero(total_volume),
        total_distance: finite_or_zero(total_distance),
        record_count: records.len() as u64,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Spend per calendar month (`YYYY-MM`), oldest first, rounded to cents.
pub fn monthly_spend(records: &[FuelingRecord]) -> Vec<MonthlySpend> {
    let mut by_month: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for record in records {
        *by_month
            .entry((record.date.year(), record.date.month()))
            .or_default() += record.total_cost;
    }
    by_month
        .into_iter()
        .map(|((year, month), total)| MonthlySpend {
            month: format!("{year:04}-{month:02}"),
            total_cost: finite_or_zero((total * 100.0).round() / 100.0),
        })
        .collect()
}

/// Points with a known consumption, in ascending odometer order.
pub fn consumption_series(records: &[FuelingRecord]) -> Vec<ConsumptionPoint> {
    let mut points: Vec<ConsumptionPoint> = records
        .iter()
        .filter_map(|record| {
            record.consumption.map(|consumption| ConsumptionPoint {
                date: record.date,
                odometer: record.odometer,
                consumption,
            })
        })
        .collect();
    points.sort_by(|a, b| a.odometer.total_cmp(&b.odometer));
    points
}

/// Most recent fill-up first.
pub fn history_order(records: &[FuelingRecord]) -> Vec<FuelingRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.odometer.total_cmp(&a.odometer));
    sorted
}

pub fn latest_odometer(records: &[FuelingRecord]) -> f64 {
    records
        .iter()
        .map(|record| record.odometer)
        .fold(0.0, f64::max)
}

/// The bound an edited odometer has to exceed: the highest odometer among
/// the other records that currently sit below the edited one.
pub fn previous_odometer(records: &[FuelingRecord], id: &str) -> f64 {
    let Some(current) = records.iter().find(|record| record.id == id) else {
        return 0.0;
    };
    records
        .iter()
        .filter(|record| record.id != id && record.odometer < current.odometer)
        .map(|record| record.odometer)
        .fold(0.0, f64::max)
}
