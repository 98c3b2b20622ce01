//! # REST API Handlers
//!
//! One async handler per endpoint. Each handler parses its input, performs
//! a single store read or write, and shapes the result with the field set
//! that endpoint exposes.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde_json::Value;
use tracing::{debug, warn};

use crate::model::{EntityKind, NewHeroPower};
use crate::serializer::{
    serialize_hero, serialize_hero_power, serialize_power, FieldSet, HeroField, HeroPowerField,
};
use crate::validation::{validate_strength, ValidationError};

use super::errors::{RestError, RestResult};
use super::parser::{parse_path_id, HeroPowerRequest, PowerPatch};
use super::server::ApiState;

/// Fields of each hero in `GET /heroes`
pub const HERO_LIST_FIELDS: &[HeroField] = &[HeroField::Id, HeroField::Name, HeroField::SuperName];

/// Fields of `GET /heroes/{id}`
pub const HERO_DETAIL_FIELDS: &[HeroField] = &[
    HeroField::Id,
    HeroField::Name,
    HeroField::SuperName,
    HeroField::HeroPowers,
];

/// Fields of the `POST /hero_powers` response
pub const HERO_POWER_CREATED_FIELDS: &[HeroPowerField] = &[
    HeroPowerField::Id,
    HeroPowerField::Strength,
    HeroPowerField::HeroId,
    HeroPowerField::PowerId,
    HeroPowerField::Hero,
    HeroPowerField::Power,
];

/// GET /
pub async fn index() -> Html<&'static str> {
    Html("<h1>Heroes API</h1>")
}

/// Fallback for known routes hit with an unsupported method
pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
}

/// Fallback for unknown routes
pub async fn route_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Route not found" })),
    )
}

/// GET /heroes
pub async fn list_heroes(State(state): State<ApiState>) -> RestResult<Json<Vec<Value>>> {
    let fields = FieldSet::only(HERO_LIST_FIELDS);
    let heroes: Vec<Value> = state
        .store
        .read(|t| t.heroes().map(|h| serialize_hero(t, h, &fields)).collect())?;
    Ok(Json(heroes))
}

/// GET /heroes/{id}
pub async fn get_hero(
    State(state): State<ApiState>,
    path: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Value>> {
    let id = parse_path_id(path)?;
    let fields = FieldSet::only(HERO_DETAIL_FIELDS);

    let hero = state
        .store
        .read(|t| t.hero(id).map(|h| serialize_hero(t, h, &fields)))?
        .ok_or(RestError::NotFound(EntityKind::Hero))?;

    debug!(id, "served hero");
    Ok(Json(hero))
}

/// GET /powers
pub async fn list_powers(State(state): State<ApiState>) -> RestResult<Json<Vec<Value>>> {
    let fields = FieldSet::defaults();
    let powers: Vec<Value> = state
        .store
        .read(|t| t.powers().map(|p| serialize_power(t, p, &fields)).collect())?;
    Ok(Json(powers))
}

/// GET /powers/{id}
pub async fn get_power(
    State(state): State<ApiState>,
    path: Result<Path<String>, PathRejection>,
) -> RestResult<Json<Value>> {
    let id = parse_path_id(path)?;
    let fields = FieldSet::defaults();

    let power = state
        .store
        .read(|t| t.power(id).map(|p| serialize_power(t, p, &fields)))?
        .ok_or(RestError::NotFound(EntityKind::Power))?;

    Ok(Json(power))
}

/// PATCH /powers/{id}
///
/// The power must exist before the body is looked at: a missing power is
/// a 404 even when the body is also invalid.
pub async fn update_power(
    State(state): State<ApiState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> RestResult<Json<Value>> {
    let id = parse_path_id(path)?;

    if state.store.get_power(id)?.is_none() {
        return Err(RestError::NotFound(EntityKind::Power));
    }

    let patch = PowerPatch::from_body(&body).inspect_err(|e| {
        warn!(id, error = %e, "rejected power update");
    })?;

    let power = state
        .store
        .update_power(id, patch.into_update())
        .inspect_err(|e| warn!(id, error = %e, "rejected power update"))?
        .ok_or(RestError::NotFound(EntityKind::Power))?;

    let fields = FieldSet::defaults();
    let body = state.store.read(|t| serialize_power(t, &power, &fields))?;
    Ok(Json(body))
}

/// POST /hero_powers
///
/// Strength is checked first, then both references.
pub async fn create_hero_power(
    State(state): State<ApiState>,
    body: Bytes,
) -> RestResult<(StatusCode, Json<Value>)> {
    let request = HeroPowerRequest::from_body(&body)?;

    let strength = request
        .strength
        .as_deref()
        .ok_or(ValidationError::InvalidStrength)
        .and_then(validate_strength)
        .inspect_err(|e| {
            warn!(code = e.code(), strength = ?request.strength, "rejected hero power");
        })?;

    let (Some(hero_id), Some(power_id)) = (request.hero_id, request.power_id) else {
        warn!(
            hero_id = ?request.hero_id,
            power_id = ?request.power_id,
            "hero power missing reference"
        );
        return Err(RestError::ReferenceNotFound);
    };

    let hero_power = state
        .store
        .create_hero_power(NewHeroPower::new(strength, hero_id, power_id))?;

    let fields = FieldSet::only(HERO_POWER_CREATED_FIELDS);
    let body = state
        .store
        .read(|t| serialize_hero_power(t, &hero_power, &fields))?;
    Ok((StatusCode::CREATED, Json(body)))
}
