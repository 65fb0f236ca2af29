//! Database connection configuration
//!
//! Explicitly constructed and handed to the pool; nothing here reads the
//! environment. The CLI is responsible for filling the fields in.

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// PostgreSQL connection parameters.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
    pub ssl_mode: PgSslMode,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: None,
            database: "userctl".to_string(),
            ssl_mode: PgSslMode::Prefer,
        }
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database)
            .ssl_mode(self.ssl_mode);

        if let Some(password) = &self.password {
            options = options.password(password);
        }

        options
    }
}
