pub mod app;
pub mod error;
pub mod feed;
pub mod services;
pub mod startup;

pub use app::{AppConfig, AppState};
pub use error::{ApiError, AppError, Result};
pub use feed::{ChangeFeed, OwnerSnapshot};
pub use services::{AppServices, SettingsSnapshot};
pub use startup::{AppPaths, ensure_app_data_dir};
