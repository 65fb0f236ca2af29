//! User repository
//!
//! Three statements: existence check + insert, select-all, delete.
//! Create is two round trips with no transaction between them; the UNIQUE
//! constraint closes the race window, and an insert-time unique violation
//! maps to the same duplicate error as the pre-check.

use sqlx::error::DatabaseError;
use sqlx::{FromRow, PgPool};

use crate::models::Username;

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("username {0} already exists")]
    DuplicateUsername(String),

    #[error("user with username {0} does not exist")]
    UserNotFound(String),
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user, letting the store assign the id.
    ///
    /// The existence check makes the common duplicate case one cheap query;
    /// the constraint violation path covers concurrent creates that both
    /// pass the check.
    pub async fn create(&self, username: Username) -> Result<User, DbError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username.as_str())
                .fetch_one(self.pool)
                .await?;

        if exists.0 {
            return Err(DbError::DuplicateUsername(username.into_string()));
        }

        let user: User =
            sqlx::query_as("INSERT INTO users (username) VALUES ($1) RETURNING id, username")
                .bind(username.as_str())
                .fetch_one(self.pool)
                .await
                .map_err(|err| match err {
                    sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                        DbError::DuplicateUsername(username.as_str().to_owned())
                    }
                    other => DbError::Sqlx(other),
                })?;

        Ok(user)
    }

    /// Fetch every user. No ORDER BY; callers must not rely on row order.
    pub async fn list_all(&self) -> Result<Vec<User>, DbError> {
        let users: Vec<User> = sqlx::query_as("SELECT id, username FROM users")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }

    /// Delete the row matching `username`.
    ///
    /// Zero rows affected is reported as not-found; "already gone" and
    /// "never existed" are indistinguishable.
    pub async fn delete_by_username(&self, username: &str) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::UserNotFound(username.to_owned()));
        }

        Ok(())
    }
}
