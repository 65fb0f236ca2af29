//! HTTP layer
//!
//! Axum server with request tracing, graceful shutdown, and JSON error
//! responses.

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
