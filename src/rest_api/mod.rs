//! # Heroes REST API
//!
//! HTTP endpoints over the entity store:
//!
//! - `GET /heroes`, `GET /heroes/{id}`
//! - `GET /powers`, `GET /powers/{id}`, `PATCH /powers/{id}`
//! - `POST /hero_powers`
//!
//! Validation and lookup failures are mapped to status codes and JSON
//! bodies in [`errors`]; nothing escapes the boundary as a fault.

pub mod errors;
pub mod handler;
pub mod parser;
pub mod server;

pub use errors::{RestError, RestResult};
pub use server::{rest_routes, ApiState};
