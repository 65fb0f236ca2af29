//! userctl-server: HTTP user management service
//!
//! Three-layer request path: HTTP routes delegate to the user service,
//! which delegates to the repository backed by PostgreSQL. Usernames are
//! unique; the schema constraint is the authority for that invariant.

pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use http::{build_router, run_server, AppState, ServerConfig};
