#![allow(dead_code)]

use std::path::PathBuf;

use fuel_core::{FuelingRecord, NewFueling, parse_date};
use fuel_db::Db;
use tempfile::TempDir;

pub struct TestDb {
    pub _dir: TempDir,
    pub db: Db,
    pub path: PathBuf,
}

pub fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("test.sqlite");
    let mut db = Db::open(&path).expect("open db");
    db.migrate().expect("migrate db");
    TestDb {
        _dir: dir,
        db,
        path,
    }
}

pub fn make_record(
    id: &str,
    owner_id: &str,
    date: &str,
    odometer: f64,
    total_cost: f64,
    price: f64,
) -> FuelingRecord {
    FuelingRecord::from_new(
        id,
        owner_id,
        NewFueling {
            date: parse_date(date).expect("date"),
            odometer,
            price_per_unit_volume: price,
            total_cost,
            station: None,
        },
    )
}

pub fn insert_records(db: &Db, records: &[FuelingRecord]) {
    for record in records {
        db.insert_fueling(record).expect("insert fueling");
    }
}

pub fn consumption_of(records: &[FuelingRecord], id: &str) -> Option<f64> {
    records
        .iter()
        .find(|record| record.id == id)
        .and_then(|record| record.consumption)
}
