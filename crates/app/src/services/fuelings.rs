use fuel_core::{
    FuelingEdit, FuelingRecord, NewFueling, compute_stats, history_order, latest_odometer,
    previous_odometer, validate_edit, validate_new,
};
use fuel_db::{Db, DbError, FuelingChange, Recalculated};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::feed::{ChangeFeed, OwnerSnapshot};
use crate::services::{SharedConfig, open_db, require_owner};

#[derive(Clone)]
pub struct FuelingsService {
    config: SharedConfig,
    feed: ChangeFeed,
}

impl FuelingsService {
    pub(super) fn new(config: SharedConfig, feed: ChangeFeed) -> Self {
        Self { config, feed }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    /// The owner's records, most recent fill-up first.
    pub fn list(&self, owner_id: &str) -> Result<Vec<FuelingRecord>> {
        let owner_id = require_owner(owner_id)?;
        let db = self.db()?;
        Ok(history_order(&db.list_fuelings(owner_id)?))
    }

    pub fn get(&self, owner_id: &str, id: &str) -> Result<FuelingRecord> {
        let owner_id = require_owner(owner_id)?;
        let db = self.db()?;
        db.get_fueling(id)?
            .filter(|record| record.owner_id == owner_id)
            .ok_or_else(|| AppError::NotFound(format!("fueling {id} not found")))
    }

    pub fn create(&self, owner_id: &str, input: NewFueling) -> Result<FuelingRecord> {
        let owner_id = require_owner(owner_id)?;
        let id = Uuid::new_v4().to_string();
        let record = FuelingRecord::from_new(id.clone(), owner_id, input.clone());
        let mut db = self.db()?;
        let result = db
            .apply_change(owner_id, |current| {
                validate_new(&input, latest_odometer(current))?;
                Ok(FuelingChange::Insert(record))
            })
            .inspect_err(|err| log_rejection("create", owner_id, err))?;
        info!(owner_id, id = %id, odometer = input.odometer, "fueling created");
        self.publish(owner_id, &result);
        find_record(&result, &id)
    }

    pub fn update(&self, owner_id: &str, edit: FuelingEdit) -> Result<FuelingRecord> {
        let owner_id = require_owner(owner_id)?;
        let mut db = self.db()?;
        let result = db
            .apply_change(owner_id, |current| {
                let mut record = current
                    .iter()
                    .find(|record| record.id == edit.id)
                    .cloned()
                    .ok_or_else(|| DbError::NotFound(edit.id.clone()))?;
                validate_edit(&edit, previous_odometer(current, &edit.id))?;
                record.apply_edit(&edit);
                Ok(FuelingChange::Update(record))
            })
            .inspect_err(|err| log_rejection("update", owner_id, err))?;
        info!(owner_id, id = %edit.id, odometer = edit.odometer, "fueling updated");
        self.publish(owner_id, &result);
        find_record(&result, &edit.id)
    }

    pub fn delete(&self, owner_id: &str, id: &str) -> Result<()> {
        let owner_id = require_owner(owner_id)?;
        let mut db = self.db()?;
        let result = db
            .apply_change(owner_id, |_| Ok(FuelingChange::Delete(id.to_string())))
            .inspect_err(|err| log_rejection("delete", owner_id, err))?;
        info!(owner_id, id, remaining = result.records.len(), "fueling deleted");
        self.publish(owner_id, &result);
        Ok(())
    }

    pub fn clear(&self, owner_id: &str) -> Result<usize> {
        let owner_id = require_owner(owner_id)?;
        let mut db = self.db()?;
        let removed = db.clear_owner(owner_id)?;
        info!(owner_id, removed, "owner records cleared");
        self.publish(
            owner_id,
            &Recalculated {
                records: Vec::new(),
                written: 0,
            },
        );
        Ok(removed)
    }

    /// Rewrites every stored consumption of the owner from scratch.
    pub fn recalculate(&self, owner_id: &str) -> Result<usize> {
        let owner_id = require_owner(owner_id)?;
        let mut db = self.db()?;
        let result = db.recalculate_owner(owner_id)?;
        self.publish(owner_id, &result);
        Ok(result.written)
    }

    fn publish(&self, owner_id: &str, result: &Recalculated) {
        self.feed.publish(OwnerSnapshot {
            owner_id: owner_id.to_string(),
            records: history_order(&result.records),
            stats: compute_stats(&result.records),
        });
    }
}

fn find_record(result: &Recalculated, id: &str) -> Result<FuelingRecord> {
    result
        .records
        .iter()
        .find(|record| record.id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("fueling {id} not found")))
}

fn log_rejection(operation: &str, owner_id: &str, err: &DbError) {
    match err {
        DbError::Validation(reason) => {
            warn!(operation, owner_id, %reason, "fueling rejected");
        }
        DbError::NotFound(id) => {
            warn!(operation, owner_id, id = %id, "fueling not found");
        }
        DbError::Sqlite(_) => {
            warn!(operation, owner_id, retryable = err.is_retryable(), error = %err, "store failure");
        }
    }
}
