mod support;

use support::{insert_records, make_record, setup_db};

#[test]
fn list_owners_summarizes_each_partition() {
    let mut test_db = setup_db();
    let db = &mut test_db.db;
    insert_records(
        db,
        &[
            make_record("a", "car-1", "2025-01-01", 1000.0, 100.0, 5.0),
            make_record("b", "car-1", "2025-01-10", 1400.0, 100.0, 5.0),
            make_record("c", "car-2", "2025-01-05", 300.0, 50.0, 5.0),
        ],
    );

    let owners = db.list_owners().expect("owners");

    assert_eq!(owners.len(), 2);
    assert_eq!(owners[0].owner_id, "car-1");
    assert_eq!(owners[0].record_count, 2);
    assert_eq!(owners[0].latest_odometer, 1400.0);
    assert_eq!(owners[1].owner_id, "car-2");
}

#[test]
fn clear_owner_removes_only_that_owner() {
    let mut test_db = setup_db();
    let db = &mut test_db.db;
    insert_records(
        db,
        &[
            make_record("a", "car-1", "2025-01-01", 1000.0, 100.0, 5.0),
            make_record("c", "car-2", "2025-01-05", 300.0, 50.0, 5.0),
        ],
    );

    assert_eq!(db.clear_owner("car-1").expect("clear"), 1);
    assert_eq!(db.count_fuelings("car-1").expect("count"), 0);
    assert_eq!(db.count_fuelings("car-2").expect("count"), 1);
}

#[test]
fn default_owner_setting_round_trips() {
    let test_db = setup_db();
    let db = &test_db.db;

    assert_eq!(db.get_default_owner().expect("get"), None);
    db.set_default_owner(" car-9 ").expect("set");
    assert_eq!(db.get_default_owner().expect("get").as_deref(), Some("car-9"));
}
