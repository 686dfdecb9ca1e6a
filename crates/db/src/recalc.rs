use fuel_core::{FuelingRecord, changed_consumptions, recalculate};
use rusqlite::TransactionBehavior;
use tracing::debug;

use crate::Db;
use crate::error::{DbError, Result};
use crate::fuelings::{
    delete_fueling, insert_fueling, list_fuelings, update_fueling, write_consumptions,
};

/// A single mutation of an owner's record set.
#[derive(Debug, Clone)]
pub enum FuelingChange {
    Insert(FuelingRecord),
    Update(FuelingRecord),
    Delete(String),
}

/// The owner's record set after a mutation, with consumption recomputed.
#[derive(Debug, Clone)]
pub struct Recalculated {
    pub records: Vec<FuelingRecord>,
    pub written: usize,
}

impl Db {
    /// Reads the owner's current set, lets `plan` decide the mutation against
    /// it, applies the mutation, recalculates every consumption and writes the
    /// derived values back. All of it runs in one immediate transaction, so
    /// concurrent writers on the same database serialize instead of
    /// recomputing from stale snapshots.
    pub fn apply_change<F>(&mut self, owner_id: &str, plan: F) -> Result<Recalculated>
    where
        F: FnOnce(&[FuelingRecord]) -> Result<FuelingChange>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let current = list_fuelings(&tx, owner_id)?;
        match plan(&current)? {
            FuelingChange::Insert(record) => insert_fueling(&tx, &record)?,
            FuelingChange::Update(record) => {
                if update_fueling(&tx, &record)? == 0 {
                    return Err(DbError::NotFound(record.id));
                }
            }
            FuelingChange::Delete(id) => {
                if delete_fueling(&tx, owner_id, &id)? == 0 {
                    return Err(DbError::NotFound(id));
                }
            }
        }
        let stored = list_fuelings(&tx, owner_id)?;
        let records = recalculate(&stored);
        let changed = changed_consumptions(&stored, &records);
        let written = write_consumptions(&tx, owner_id, &changed)?;
        tx.commit()?;
        debug!(owner_id, written, total = records.len(), "recalculated consumption");
        Ok(Recalculated { records, written })
    }

    /// Recomputes and persists every consumption of the owner without
    /// mutating any record.
    pub fn recalculate_owner(&mut self, owner_id: &str) -> Result<Recalculated> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let stored = list_fuelings(&tx, owner_id)?;
        let records = recalculate(&stored);
        let all: Vec<(String, Option<f64>)> = records
            .iter()
            .map(|record| (record.id.clone(), record.consumption))
            .collect();
        let written = write_consumptions(&tx, owner_id, &all)?;
        tx.commit()?;
        debug!(owner_id, written, "rewrote consumption");
        Ok(Recalculated { records, written })
    }
}
