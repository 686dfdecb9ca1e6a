mod support;

use std::thread;

use fuel_core::{
    FuelingEdit, ValidationError, latest_odometer, parse_date, recalculate, validate_new,
};
use fuel_db::{Db, DbError, FuelingChange};
use support::{consumption_of, insert_records, make_record, setup_db};

#[test]
fn insert_recalculates_and_persists_whole_set() {
    let mut test_db = setup_db();
    let db = &mut test_db.db;
    insert_records(
        db,
        &[make_record("a", "car-1", "2025-01-01", 1000.0, 100.0, 5.0)],
    );

    let result = db
        .apply_change("car-1", |_| {
            Ok(FuelingChange::Insert(make_record(
                "b",
                "car-1",
                "2025-01-15",
                1400.0,
                120.0,
                6.0,
            )))
        })
        .expect("apply");

    assert_eq!(consumption_of(&result.records, "a"), Some(20.0));
    assert_eq!(consumption_of(&result.records, "b"), None);
    assert_eq!(result.written, 1);

    let stored = db.list_fuelings("car-1").expect("list");
    assert_eq!(consumption_of(&stored, "a"), Some(20.0));
}

#[test]
fn out_of_order_insert_rederives_neighbours() {
    let mut test_db = setup_db();
    let db = &mut test_db.db;
    insert_records(
        db,
        &[
            make_record("a", "car-1", "2025-01-01", 1000.0, 100.0, 5.0),
            make_record("c", "car-1", "2025-01-20", 1600.0, 100.0, 5.0),
        ],
    );
    db.recalculate_owner("car-1").expect("recalc");

    let result = db
        .apply_change("car-1", |_| {
            Ok(FuelingChange::Insert(make_record(
                "b",
                "car-1",
                "2025-01-10",
                1200.0,
                100.0,
                5.0,
            )))
        })
        .expect("apply");

    assert_eq!(consumption_of(&result.records, "a"), Some(10.0));
    assert_eq!(consumption_of(&result.records, "b"), Some(20.0));
    assert_eq!(consumption_of(&result.records, "c"), None);
}

#[test]
fn update_that_reorders_records_rewrites_all_values() {
    let mut test_db = setup_db();
    let db = &mut test_db.db;
    insert_records(
        db,
        &[
            make_record("a", "car-1", "2025-01-01", 1000.0, 100.0, 5.0),
            make_record("b", "car-1", "2025-01-10", 1200.0, 100.0, 5.0),
            make_record("c", "car-1", "2025-01-20", 1500.0, 100.0, 5.0),
        ],
    );
    db.recalculate_owner("car-1").expect("recalc");

    let edit = FuelingEdit {
        id: "b".to_string(),
        date: parse_date("2025-01-30").expect("date"),
        odometer: 1800.0,
        price_per_unit_volume: 5.0,
        total_cost: 100.0,
        station: None,
    };
    db.apply_change("car-1", |current| {
        let mut record = current
            .iter()
            .find(|record| record.id == edit.id)
            .cloned()
            .ok_or_else(|| DbError::NotFound(edit.id.clone()))?;
        record.apply_edit(&edit);
        Ok(FuelingChange::Update(record))
    })
    .expect("apply");

    let stored = db.list_fuelings("car-1").expect("list");
    assert_eq!(consumption_of(&stored, "a"), Some(25.0));
    assert_eq!(consumption_of(&stored, "c"), Some(15.0));
    assert_eq!(consumption_of(&stored, "b"), None);
}

#[test]
fn delete_recalculates_remaining_records() {
    let mut test_db = setup_db();
    let db = &mut test_db.db;
    insert_records(
        db,
        &[
            make_record("a", "car-1", "2025-01-01", 1000.0, 100.0, 5.0),
            make_record("b", "car-1", "2025-01-10", 1200.0, 100.0, 5.0),
            make_record("c", "car-1", "2025-01-20", 1500.0, 100.0, 5.0),
        ],
    );
    db.recalculate_owner("car-1").expect("recalc");

    db.apply_change("car-1", |_| Ok(FuelingChange::Delete("c".to_string())))
        .expect("apply");

    let stored = db.list_fuelings("car-1").expect("list");
    assert_eq!(stored.len(), 2);
    assert_eq!(consumption_of(&stored, "a"), Some(10.0));
    assert_eq!(consumption_of(&stored, "b"), None);
}

#[test]
fn rejected_plan_leaves_store_untouched() {
    let mut test_db = setup_db();
    let db = &mut test_db.db;
    insert_records(
        db,
        &[make_record("a", "car-1", "2025-01-01", 1000.0, 100.0, 5.0)],
    );
    let candidate = make_record("b", "car-1", "2025-01-15", 900.0, 100.0, 5.0);
    let input = fuel_core::NewFueling {
        date: candidate.date,
        odometer: candidate.odometer,
        price_per_unit_volume: candidate.price_per_unit_volume,
        total_cost: candidate.total_cost,
        station: None,
    };

    let err = db
        .apply_change("car-1", |current| {
            validate_new(&input, latest_odometer(current))?;
            Ok(FuelingChange::Insert(candidate.clone()))
        })
        .unwrap_err();

    assert!(matches!(
        err,
        DbError::Validation(ValidationError::OdometerNotIncreasing { .. })
    ));
    assert!(!err.is_retryable());
    assert_eq!(db.count_fuelings("car-1").expect("count"), 1);
}

#[test]
fn deleting_missing_record_is_not_found() {
    let mut test_db = setup_db();
    let db = &mut test_db.db;

    let err = db
        .apply_change("car-1", |_| Ok(FuelingChange::Delete("nope".to_string())))
        .unwrap_err();

    assert!(matches!(err, DbError::NotFound(id) if id == "nope"));
}

#[test]
fn recalculate_owner_repairs_stale_values() {
    let mut test_db = setup_db();
    let db = &mut test_db.db;
    let mut stale = make_record("a", "car-1", "2025-01-01", 1000.0, 100.0, 5.0);
    stale.consumption = Some(99.0);
    insert_records(
        db,
        &[
            stale,
            make_record("b", "car-1", "2025-01-10", 1400.0, 100.0, 5.0),
        ],
    );

    let result = db.recalculate_owner("car-1").expect("recalc");

    assert_eq!(result.written, 2);
    let stored = db.list_fuelings("car-1").expect("list");
    assert_eq!(consumption_of(&stored, "a"), Some(20.0));
}

#[test]
fn concurrent_writers_on_one_owner_serialize() {
    const WRITERS: usize = 4;
    const PER_WRITER: usize = 10;

    let test_db = setup_db();
    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let path = test_db.path.clone();
            thread::spawn(move || {
                let mut db = Db::open(&path).expect("open db");
                for n in 0..PER_WRITER {
                    let id = format!("w{writer}-{n}");
                    loop {
                        let result = db.apply_change("car-1", |current| {
                            let odometer = latest_odometer(current) + 100.0;
                            Ok(FuelingChange::Insert(make_record(
                                &id,
                                "car-1",
                                "2025-01-01",
                                odometer,
                                100.0,
                                5.0,
                            )))
                        });
                        match result {
                            Ok(_) => break,
                            Err(err) if err.is_retryable() => continue,
                            Err(err) => panic!("insert {id}: {err}"),
                        }
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread");
    }

    let stored = test_db.db.list_fuelings("car-1").expect("list");
    assert_eq!(stored.len(), WRITERS * PER_WRITER);

    // Each insert saw the previous commit, so no two readings collide.
    let mut odometers: Vec<f64> = stored.iter().map(|record| record.odometer).collect();
    odometers.dedup();
    assert_eq!(odometers.len(), stored.len());

    let expected = recalculate(&stored);
    for record in &stored {
        assert_eq!(
            record.consumption,
            consumption_of(&expected, &record.id),
            "stale consumption on {}",
            record.id
        );
    }
}
