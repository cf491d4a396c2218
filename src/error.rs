//! Error types for sequence operations.
//!
//! A failure anywhere in a pull chain is carried as an `Err` item inside the
//! sequence itself and surfaces at the nearest awaiting consumer. Nothing is
//! retried automatically.

use thiserror::Error;

/// Main error type for sequence operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeqError {
    /// A user-supplied callback (map/filter/peek/fold/find/for_each) failed
    #[error("callback failed: {0}")]
    Callback(String),
    /// A producer failed while being pulled
    #[error("source failed: {0}")]
    Source(String),
    /// Custom error with message
    #[error("sequence error: {0}")]
    Custom(String),
}

impl SeqError {
    /// Callback failure from any displayable cause
    pub fn callback(msg: impl Into<String>) -> Self {
        SeqError::Callback(msg.into())
    }

    /// Source failure from any displayable cause
    pub fn source(msg: impl Into<String>) -> Self {
        SeqError::Source(msg.into())
    }
}

/// Result type for sequence operations
pub type SeqResult<T> = Result<T, SeqError>;
