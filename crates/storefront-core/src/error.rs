//! Core Errors

use thiserror::Error;

/// Failures reading or writing on-device storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Login lookup failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("User not found")]
    UserNotFound,
}
