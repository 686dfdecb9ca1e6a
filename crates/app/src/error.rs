use fuel_core::ValidationError;
use fuel_db::DbError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("db error: {0}")]
    Db(DbError),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Message(String),
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Validation(err) => AppError::Validation(err),
            DbError::NotFound(id) => AppError::NotFound(format!("fueling {id} not found")),
            other => AppError::Db(other),
        }
    }
}

impl AppError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Db(err) if err.is_retryable())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub retryable: bool,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let retryable = err.is_retryable();
        let (status, code) = match err {
            AppError::Validation(_) => (400, Some("validation_failed".to_string())),
            AppError::InvalidInput(_) => (400, Some("invalid_input".to_string())),
            AppError::NotFound(_) => (404, Some("not_found".to_string())),
            AppError::Db(_) if retryable => (503, Some("store_busy".to_string())),
            AppError::Db(_) | AppError::Io(_) | AppError::Serde(_) | AppError::Message(_) => {
                (500, None)
            }
        };
        Self {
            status,
            message: err.to_string(),
            code,
            retryable,
        }
    }
}
