use fuel_core::OwnerSummary;
use rusqlite::params;

use crate::Db;
use crate::error::Result;
use crate::helpers::row_to_owner_summary;

impl Db {
    pub fn list_owners(&self) -> Result<Vec<OwnerSummary>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT owner_id, COUNT(*) AS record_count, MAX(odometer) AS latest_odometer
            FROM fueling
            GROUP BY owner_id
            ORDER BY owner_id ASC
            "#,
        )?;
        let rows = stmt
            .query_map([], row_to_owner_summary)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn clear_owner(&mut self, owner_id: &str) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM fueling WHERE owner_id = ?1", params![owner_id])?;
        tx.commit()?;
        Ok(removed)
    }
}
