use std::path::PathBuf;

use crate::error::{AppError, Result};
use crate::feed::ChangeFeed;
use crate::services::AppServices;
use fuel_db::Db;

/// Paths and files needed to run the local tracker.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: PathBuf,
}

/// Application state shared by frontends.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
    pub feed: ChangeFeed,
}

impl AppState {
    pub fn new(db_path: PathBuf) -> Self {
        let config = AppConfig { db_path };
        let feed = ChangeFeed::default();
        let services = AppServices::new(&config, feed.clone());
        Self {
            config,
            services,
            feed,
        }
    }

    pub fn setup_db(&self) -> Result<()> {
        setup_db(&self.config.db_path)
            .map_err(|err| AppError::Message(format!("initialize db: {}", err)))
    }
}

pub fn setup_db(path: &std::path::Path) -> Result<()> {
    let mut db = Db::open(path)?;
    db.migrate()?;
    Ok(())
}
