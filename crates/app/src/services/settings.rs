use crate::error::Result;
use crate::services::{SharedConfig, open_db, require_owner};
use fuel_db::Db;

/// Snapshot of user-configurable settings stored in the DB.
#[derive(Debug, Clone)]
pub struct SettingsSnapshot {
    pub default_owner: Option<String>,
    pub db_path: String,
}

#[derive(Clone)]
pub struct SettingsService {
    config: SharedConfig,
}

impl SettingsService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    pub fn get(&self) -> Result<SettingsSnapshot> {
        let db = self.db()?;
        Ok(SettingsSnapshot {
            default_owner: db.get_default_owner()?,
            db_path: self.config.db_path.to_string_lossy().to_string(),
        })
    }

    pub fn set_default_owner(&self, owner_id: &str) -> Result<()> {
        let owner_id = require_owner(owner_id)?;
        let db = self.db()?;
        Ok(db.set_default_owner(owner_id)?)
    }
}
