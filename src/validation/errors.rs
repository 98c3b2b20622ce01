//! Validation error types
//!
//! Error codes:
//! - HEROES_DESCRIPTION_TOO_SHORT
//! - HEROES_INVALID_STRENGTH
//! - HEROES_REFERENCE_NOT_FOUND
//! - HEROES_FIELD_REQUIRED

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A candidate field set violated a domain rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Description absent, empty, or under the minimum length
    #[error("Description must be at least 20 characters long")]
    DescriptionTooShort,

    /// Strength outside the allowed set
    #[error("Invalid strength value")]
    InvalidStrength,

    /// Hero or power id did not resolve
    #[error("Hero or Power not found")]
    ReferenceNotFound,

    /// Required string field was empty
    #[error("{0} must be present")]
    FieldRequired(&'static str),
}

impl ValidationError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::DescriptionTooShort => "HEROES_DESCRIPTION_TOO_SHORT",
            ValidationError::InvalidStrength => "HEROES_INVALID_STRENGTH",
            ValidationError::ReferenceNotFound => "HEROES_REFERENCE_NOT_FOUND",
            ValidationError::FieldRequired(_) => "HEROES_FIELD_REQUIRED",
        }
    }
}
