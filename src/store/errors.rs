//! Store error types

use std::io;

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the entity store
///
/// A missing row is not an error; see [`super::EntityStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Candidate fields rejected before any mutation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Snapshot file could not be read or written
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Snapshot could not be encoded or decoded
    #[error("Snapshot encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Snapshot contents failed verification
    #[error("Snapshot corrupted: {0}")]
    Corruption(String),

    /// A writer panicked while holding the table lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        StoreError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn corruption(reason: impl Into<String>) -> Self {
        StoreError::Corruption(reason.into())
    }

    /// Returns the validation failure, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            StoreError::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// Storage faults are unrecoverable for the request; validation is not
    pub fn is_fault(&self) -> bool {
        !matches!(self, StoreError::Validation(_))
    }
}
