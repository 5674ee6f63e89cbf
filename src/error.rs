use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageAppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid food name: {0}")]
    InvalidFoodName(String),

    #[error("Invalid date format (expected yyyy-mm-dd): {0}")]
    InvalidDate(String),

    #[error("Best-before {date} must be between {earliest} and {latest}")]
    DateOutOfRange {
        date: chrono::NaiveDate,
        earliest: chrono::NaiveDate,
        latest: chrono::NaiveDate,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, StorageAppError>;
