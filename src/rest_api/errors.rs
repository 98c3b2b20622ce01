//! # REST API Errors
//!
//! Every failure is answered with a JSON body. Lookups of a missing id use
//! a singular `error` key; rule violations use an `errors` array.
//!
//! | Variant            | Status | Body                  |
//! |--------------------|--------|-----------------------|
//! | `NotFound`         | 404    | `{"error": msg}`      |
//! | `ReferenceNotFound`| 404    | `{"errors": [msg]}`   |
//! | `Validation`       | 400    | `{"errors": [msg]}`   |
//! | `MalformedRequest` | 400    | `{"errors": [msg]}`   |
//! | `Internal`         | 500    | `{"error": msg}`      |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::model::EntityKind;
use crate::store::StoreError;
use crate::validation::ValidationError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id did not resolve
    #[error("{} not found", .0.display_name())]
    NotFound(EntityKind),

    /// A referenced hero or power did not resolve
    #[error("Hero or Power not found")]
    ReferenceNotFound,

    /// A field failed a domain rule
    #[error("{0}")]
    Validation(String),

    /// Body or path could not be parsed
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage fault
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound(_) | RestError::ReferenceNotFound => StatusCode::NOT_FOUND,
            RestError::Validation(_) | RestError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the body lists messages under `errors`
    fn uses_error_list(&self) -> bool {
        matches!(
            self,
            RestError::ReferenceNotFound
                | RestError::Validation(_)
                | RestError::MalformedRequest(_)
        )
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        debug!(code = err.code(), error = %err, "validation failed");
        match err {
            ValidationError::ReferenceNotFound => RestError::ReferenceNotFound,
            // Strength failures are reported without the prefix.
            ValidationError::InvalidStrength => RestError::Validation(err.to_string()),
            other => RestError::Validation(format!("Validation error: {}", other)),
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(v) => RestError::from(v),
            fault => {
                error!(error = %fault, "store fault");
                RestError::Internal(fault.to_string())
            }
        }
    }
}

/// Body for lookup misses and server faults
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body for rejected input
#[derive(Debug, Serialize)]
pub struct ErrorsResponse {
    pub errors: Vec<String>,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.uses_error_list() {
            let body = ErrorsResponse {
                errors: vec![self.to_string()],
            };
            (status, Json(body)).into_response()
        } else {
            let body = ErrorResponse {
                error: self.to_string(),
            };
            (status, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::NotFound(EntityKind::Hero).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RestError::ReferenceNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RestError::Validation("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::MalformedRequest("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            RestError::NotFound(EntityKind::Hero).to_string(),
            "Hero not found"
        );
        assert_eq!(
            RestError::NotFound(EntityKind::Power).to_string(),
            "Power not found"
        );
    }

    #[test]
    fn test_validation_message_formats() {
        assert_eq!(
            RestError::from(ValidationError::DescriptionTooShort).to_string(),
            "Validation error: Description must be at least 20 characters long"
        );
        assert_eq!(
            RestError::from(ValidationError::InvalidStrength).to_string(),
            "Invalid strength value"
        );
        assert_eq!(
            RestError::from(ValidationError::ReferenceNotFound),
            RestError::ReferenceNotFound
        );
    }

    #[test]
    fn test_store_fault_is_internal() {
        let err = RestError::from(StoreError::LockPoisoned);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
