use std::collections::HashMap;

use crate::FuelingRecord;

/// Recomputes `consumption` for every record of one owner.
///
/// Records are walked in ascending odometer order. The distance to the next
/// fill-up divided by the volume put in at this fill-up is attributed to this
/// record; the highest odometer never has a value. Records sharing an
/// odometer with another record get `None`, so a tie group loses the step to
/// the next higher odometer. The returned records keep the input order.
pub fn recalculate(records: &[FuelingRecord]) -> Vec<FuelingRecord> {
    let mut output = records.to_vec();
    recalculate_in_place(&mut output);
    output
}

pub fn recalculate_in_place(records: &mut [FuelingRecord]) {
    let mut order: Vec<usize> = (0..records.len()).collect();
    // `sort_by` is stable, so equal odometers keep their input order.
    order.sort_by(|&a, &b| records[a].odometer.total_cmp(&records[b].odometer));

    let mut derived: Vec<Option<f64>> = vec![None; records.len()];
    for (position, &index) in order.iter().enumerate() {
        let Some(&next_index) = order.get(position + 1) else {
            continue;
        };
        let current = &records[index];
        if position > 0 && records[order[position - 1]].odometer == current.odometer {
            continue;
        }
        derived[index] = consumption_between(current, &records[next_index]);
    }

    for (record, value) in records.iter_mut().zip(derived) {
        record.consumption = value;
    }
}

fn consumption_between(current: &FuelingRecord, next: &FuelingRecord) -> Option<f64> {
    let distance = next.odometer - current.odometer;
    let fuel_used = current.volume;
    if !(fuel_used > 0.0 && distance > 0.0) {
        return None;
    }
    let value = distance / fuel_used;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Ids whose consumption differs between two snapshots of the same set,
/// paired with the value from `after`.
pub fn changed_consumptions(
    before: &[FuelingRecord],
    after: &[FuelingRecord],
) -> Vec<(String, Option<f64>)> {
    let previous: HashMap<&str, Option<f64>> = before
        .iter()
        .map(|record| (record.id.as_str(), record.consumption))
        .collect();
    after
        .iter()
        .filter(|record| previous.get(record.id.as_str()) != Some(&record.consumption))
        .map(|record| (record.id.clone(), record.consumption))
        .collect()
}
