use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid user id {input:?}: {reason}")]
    InvalidUserId { input: String, reason: String },
}
