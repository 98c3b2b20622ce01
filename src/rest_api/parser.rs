//! # Request Parsing
//!
//! Turns raw path segments and bodies into typed requests. Bodies are
//! parsed by hand rather than through the `Json` extractor so that the
//! handler decides when a malformed body matters (after the path lookup).

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use serde_json::Value;

use crate::model::{EntityId, PowerUpdate};
use crate::validation::ValidationError;

use super::errors::{RestError, RestResult};

/// Parses an integer id from a path segment.
pub fn parse_id(raw: &str) -> RestResult<EntityId> {
    raw.parse::<EntityId>()
        .map_err(|_| RestError::MalformedRequest(format!("invalid id '{}'", raw)))
}

/// Parses the `:id` segment of a matched route.
///
/// A segment axum could not decode (bad percent-encoding, invalid UTF-8)
/// is malformed like any other non-integer id.
pub fn parse_path_id(path: Result<Path<String>, PathRejection>) -> RestResult<EntityId> {
    match path {
        Ok(Path(raw)) => parse_id(&raw),
        Err(rejection) => Err(RestError::MalformedRequest(rejection.body_text())),
    }
}

/// Parses a request body as a JSON object.
pub fn parse_json_object(body: &Bytes) -> RestResult<serde_json::Map<String, Value>> {
    if body.is_empty() {
        return Err(RestError::MalformedRequest(
            "request body is required".to_string(),
        ));
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(RestError::MalformedRequest(
            "request body must be a JSON object".to_string(),
        )),
        Err(e) => Err(RestError::MalformedRequest(format!("invalid JSON: {}", e))),
    }
}

/// Body of `PATCH /powers/{id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerPatch {
    pub description: String,
}

impl PowerPatch {
    /// Extracts the description. A missing or non-string description fails
    /// the same way a short one does.
    pub fn from_body(body: &Bytes) -> RestResult<Self> {
        let map = parse_json_object(body)?;
        match map.get("description") {
            Some(Value::String(description)) => Ok(Self {
                description: description.clone(),
            }),
            _ => Err(ValidationError::DescriptionTooShort.into()),
        }
    }

    pub fn into_update(self) -> PowerUpdate {
        PowerUpdate::description(self.description)
    }
}

/// Body of `POST /hero_powers`
///
/// Fields stay loosely typed here: a wrong-typed strength is an invalid
/// strength and a wrong-typed id is an unresolvable reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroPowerRequest {
    pub strength: Option<String>,
    pub hero_id: Option<EntityId>,
    pub power_id: Option<EntityId>,
}

impl HeroPowerRequest {
    pub fn from_body(body: &Bytes) -> RestResult<Self> {
        let map = parse_json_object(body)?;
        Ok(Self {
            strength: map
                .get("strength")
                .and_then(Value::as_str)
                .map(str::to_string),
            hero_id: map.get("hero_id").and_then(Value::as_i64),
            power_id: map.get("power_id").and_then(Value::as_i64),
        })
    }
}
