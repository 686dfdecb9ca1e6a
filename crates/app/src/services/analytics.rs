use crate::error::Result;
use crate::services::{SharedConfig, open_db, require_owner};
use fuel_core::{
    ConsumptionPoint, ConsumptionStats, FuelingRecord, MonthlySpend, OwnerSummary, compute_stats,
    consumption_series, monthly_spend, recalculate,
};
use fuel_db::Db;

#[derive(Clone)]
pub struct AnalyticsService {
    config: SharedConfig,
}

impl AnalyticsService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    // Consumption is derived from the current set, not read back from storage.
    fn records(&self, owner_id: &str) -> Result<Vec<FuelingRecord>> {
        let owner_id = require_owner(owner_id)?;
        let db = self.db()?;
        Ok(recalculate(&db.list_fuelings(owner_id)?))
    }

    pub fn summary(&self, owner_id: &str) -> Result<ConsumptionStats> {
        Ok(compute_stats(&self.records(owner_id)?))
    }

    pub fn monthly_spend(&self, owner_id: &str) -> Result<Vec<MonthlySpend>> {
        Ok(monthly_spend(&self.records(owner_id)?))
    }

    pub fn consumption_series(&self, owner_id: &str) -> Result<Vec<ConsumptionPoint>> {
        Ok(consumption_series(&self.records(owner_id)?))
    }

    pub fn owners(&self) -> Result<Vec<OwnerSummary>> {
        let db = self.db()?;
        Ok(db.list_owners()?)
    }
}
