//! # REST API Routes
//!
//! Axum router for the heroes API.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::store::EntityStore;

use super::handler;

/// Shared state for every handler
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<EntityStore>,
}

impl ApiState {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }
}

/// Build the API router
///
/// Every route answers unsupported methods with a JSON 405 and unknown
/// paths fall through to a JSON 404.
pub fn rest_routes(state: ApiState) -> Router {
    Router::new()
        .route("/", get(handler::index).fallback(handler::method_not_allowed))
        .route(
            "/heroes",
            get(handler::list_heroes).fallback(handler::method_not_allowed),
        )
        .route(
            "/heroes/:id",
            get(handler::get_hero).fallback(handler::method_not_allowed),
        )
        .route(
            "/powers",
            get(handler::list_powers).fallback(handler::method_not_allowed),
        )
        .route(
            "/powers/:id",
            get(handler::get_power)
                .patch(handler::update_power)
                .fallback(handler::method_not_allowed),
        )
        .route(
            "/hero_powers",
            post(handler::create_hero_power).fallback(handler::method_not_allowed),
        )
        .fallback(handler::route_not_found)
        .with_state(state)
}
