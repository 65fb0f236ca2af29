//! Persistence layer: connection config, pool, startup schema, repositories

pub mod config;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use config::DatabaseConfig;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::{DbError, User, UserRepo};
