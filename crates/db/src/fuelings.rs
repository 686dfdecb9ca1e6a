use chrono::Utc;
use fuel_core::FuelingRecord;
use rusqlite::{Connection, OptionalExtension, params};

use crate::Db;
use crate::error::{DbError, Result};
use crate::helpers::{FUELING_COLUMNS, row_to_fueling};

impl Db {
    pub fn insert_fueling(&self, record: &FuelingRecord) -> Result<()> {
        insert_fueling(&self.conn, record)
    }

    /// Overwrites the stored fields of an existing record of the same owner.
    pub fn update_fueling(&self, record: &FuelingRecord) -> Result<usize> {
        update_fueling(&self.conn, record)
    }

    pub fn delete_fueling(&self, owner_id: &str, id: &str) -> Result<usize> {
        delete_fueling(&self.conn, owner_id, id)
    }

    pub fn get_fueling(&self, id: &str) -> Result<Option<FuelingRecord>> {
        self.conn
            .query_row(
                &format!("SELECT {FUELING_COLUMNS} FROM fueling WHERE id = ?1"),
                params![id],
                row_to_fueling,
            )
            .optional()
            .map_err(DbError::from)
    }

    pub fn list_fuelings(&self, owner_id: &str) -> Result<Vec<FuelingRecord>> {
        list_fuelings(&self.conn, owner_id)
    }

    pub fn count_fuelings(&self, owner_id: &str) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM fueling WHERE owner_id = ?1",
                params![owner_id],
                |row| row.get(0),
            )
            .map_err(DbError::from)
    }

    pub fn write_consumptions(
        &mut self,
        owner_id: &str,
        values: &[(String, Option<f64>)],
    ) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let written = write_consumptions(&tx, owner_id, values)?;
        tx.commit()?;
        Ok(written)
    }
}

pub(crate) fn insert_fueling(conn: &Connection, record: &FuelingRecord) -> Result<()> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        r#"
        INSERT INTO fueling (
          id, owner_id, date, odometer, price_per_unit_volume, total_cost, volume,
          station, consumption, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)
        "#,
        params![
            record.id,
            record.owner_id,
            record.date,
            record.odometer,
            record.price_per_unit_volume,
            record.total_cost,
            record.volume,
            record.station,
            record.consumption,
            now,
        ],
    )?;
    Ok(())
}

pub(crate) fn update_fueling(conn: &Connection, record: &FuelingRecord) -> Result<usize> {
    let now = Utc::now().to_rfc3339();
    let rows = conn.execute(
        r#"
        UPDATE fueling
        SET date = ?3,
            odometer = ?4,
            price_per_unit_volume = ?5,
            total_cost = ?6,
            volume = ?7,
            station = ?8,
            consumption = ?9,
            updated_at = ?10
        WHERE id = ?1 AND owner_id = ?2
        "#,
        params![
            record.id,
            record.owner_id,
            record.date,
            record.odometer,
            record.price_per_unit_volume,
            record.total_cost,
            record.volume,
            record.station,
            record.consumption,
            now,
        ],
    )?;
    Ok(rows)
}

pub(crate) fn delete_fueling(conn: &Connection, owner_id: &str, id: &str) -> Result<usize> {
    let rows = conn.execute(
        "DELETE FROM fueling WHERE id = ?1 AND owner_id = ?2",
        params![id, owner_id],
    )?;
    Ok(rows)
}

pub(crate) fn list_fuelings(conn: &Connection, owner_id: &str) -> Result<Vec<FuelingRecord>> {
    let mut stmt = conn.prepare(&format!(
        r#"
        SELECT {FUELING_COLUMNS}
        FROM fueling
        WHERE owner_id = ?1
        ORDER BY odometer ASC, rowid ASC
        "#
    ))?;
    let rows = stmt
        .query_map(params![owner_id], row_to_fueling)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub(crate) fn write_consumptions(
    conn: &Connection,
    owner_id: &str,
    values: &[(String, Option<f64>)],
) -> Result<usize> {
    let mut stmt =
        conn.prepare("UPDATE fueling SET consumption = ?1 WHERE id = ?2 AND owner_id = ?3")?;
    let mut written = 0usize;
    for (id, consumption) in values {
        written += stmt.execute(params![consumption, id, owner_id])?;
    }
    Ok(written)
}
