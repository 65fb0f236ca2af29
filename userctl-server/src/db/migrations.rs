//! Startup schema creation
//!
//! One table. The UNIQUE constraint on username is the authority for the
//! uniqueness invariant; the repository's pre-insert check is only a fast
//! path for a friendly error.

use sqlx::PgPool;

/// Create the users table if it does not exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("running database migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            username TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("migrations complete");
    Ok(())
}
