use fuel_core::{FuelingRecord, OwnerSummary};
use rusqlite::Row;

pub(crate) const FUELING_COLUMNS: &str = "id, owner_id, date, odometer, price_per_unit_volume, \
     total_cost, volume, station, consumption";

pub(crate) fn row_to_fueling(row: &Row<'_>) -> std::result::Result<FuelingRecord, rusqlite::Error> {
    Ok(FuelingRecord {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        date: row.get(2)?,
        odometer: row.get(3)?,
        price_per_unit_volume: row.get(4)?,
        total_cost: row.get(5)?,
        volume: row.get(6)?,
        station: row.get(7)?,
        consumption: row.get(8)?,
    })
}

pub(crate) fn row_to_owner_summary(
    row: &Row<'_>,
) -> std::result::Result<OwnerSummary, rusqlite::Error> {
    let record_count: i64 = row.get(1)?;
    Ok(OwnerSummary {
        owner_id: row.get(0)?,
        record_count: record_count.max(0) as u64,
        latest_odometer: row.get::<_, Option<f64>>(2)?.unwrap_or(0.0),
    })
}
