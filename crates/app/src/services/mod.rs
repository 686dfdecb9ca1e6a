mod analytics;
mod fuelings;
mod settings;

use std::sync::Arc;

use crate::app::AppConfig;
use crate::error::{AppError, Result};
use crate::feed::ChangeFeed;
use fuel_db::Db;

pub use analytics::AnalyticsService;
pub use fuelings::FuelingsService;
pub use settings::{SettingsService, SettingsSnapshot};

type SharedConfig = Arc<AppConfig>;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub analytics: AnalyticsService,
    pub fuelings: FuelingsService,
    pub settings: SettingsService,
}

impl AppServices {
    pub fn new(config: &AppConfig, feed: ChangeFeed) -> Self {
        let shared = Arc::new(config.clone());
        Self {
            analytics: AnalyticsService::new(shared.clone()),
            fuelings: FuelingsService::new(shared.clone(), feed),
            settings: SettingsService::new(shared),
        }
    }
}

fn open_db(config: &SharedConfig) -> Result<Db> {
    Ok(Db::open(&config.db_path)?)
}

fn require_owner(owner_id: &str) -> Result<&str> {
    let owner_id = owner_id.trim();
    if owner_id.is_empty() {
        return Err(AppError::InvalidInput("owner id is required".to_string()));
    }
    Ok(owner_id)
}
