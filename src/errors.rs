use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by the ledger, goal tracker, and storage layers.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Index {index} is out of range (collection holds {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Stored value for `{key}` is corrupt: {reason}")]
    StorageReadCorrupt { key: String, reason: String },
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl BudgetError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        BudgetError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, BudgetError::Validation(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}
