//! # HTTP Server Module
//!
//! Binds the REST API to a socket with CORS and request tracing.

pub mod config;
pub mod server;

pub use config::{HttpServerConfig, DEFAULT_PORT};
pub use server::HttpServer;
