//! User service
//!
//! Delegates verbatim to the repository. Exists so the HTTP layer has a
//! transport-independent interface and never touches `db::repos` directly.

use sqlx::PgPool;

use crate::db::{DbError, User, UserRepo};
use crate::models::Username;

pub struct UserService<'a> {
    repo: UserRepo<'a>,
}

impl<'a> UserService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            repo: UserRepo::new(pool),
        }
    }

    pub async fn create(&self, username: Username) -> Result<User, DbError> {
        self.repo.create(username).await
    }

    pub async fn list_all(&self) -> Result<Vec<User>, DbError> {
        self.repo.list_all().await
    }

    pub async fn delete_by_username(&self, username: &str) -> Result<(), DbError> {
        self.repo.delete_by_username(username).await
    }
}
