//! Error types for store operations.

use roster_types::UserId;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No live user has this id.
    #[error("user not found: {id}")]
    NotFound { id: UserId },

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
