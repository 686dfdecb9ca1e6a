use rusqlite::Connection;

#[test]
fn migrate_creates_fueling_schema() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("fresh.sqlite");
    let mut db = fuel_db::Db::open(&db_path).expect("open db");
    db.migrate().expect("migrate db");

    let conn = Connection::open(&db_path).expect("open conn");
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info('fueling')")
        .expect("prepare");
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("columns");

    for expected in ["id", "owner_id", "odometer", "volume", "station", "consumption"] {
        assert!(columns.iter().any(|name| name == expected), "missing {expected}");
    }
}

#[test]
fn migrate_is_idempotent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("twice.sqlite");
    let mut db = fuel_db::Db::open(&db_path).expect("open db");
    db.migrate().expect("first migrate");
    db.migrate().expect("second migrate");

    let conn = Connection::open(&db_path).expect("open conn");
    let index_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_fueling_owner_odometer'",
            [],
            |row| row.get(0),
        )
        .expect("index count");
    assert_eq!(index_count, 1);
}
