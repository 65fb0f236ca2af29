//! API error types with IntoResponse
//!
//! Errors are converted to JSON `{"error": message}` bodies with the
//! matching status code. Storage failures are never collapsed into domain
//! errors: they map to 500 with the underlying cause logged, while 409 and
//! 404 are reserved for true duplicates and true zero-row deletes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400); storage is never reached
    Validation(ValidationError),

    /// Username already taken (409)
    Duplicate { username: String },

    /// No user with that username (404)
    NotFound { username: String },

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error with a fixed user-visible message (500)
    Internal { message: &'static str },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Duplicate { username } => (
                StatusCode::CONFLICT,
                format!("username {} already exists", username),
            ),
            Self::NotFound { username } => (
                StatusCode::NOT_FOUND,
                format!("user with username {} does not exist", username),
            ),
            Self::Database(e) => {
                // Log the actual error, return a generic message
                tracing::error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
            Self::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::DuplicateUsername(username) => Self::Duplicate { username },
            DbError::UserNotFound(username) => Self::NotFound { username },
            other => Self::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Missing { field: "username" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn duplicate_is_409_with_username() {
        let err = ApiError::Duplicate {
            username: "alice".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["error"], "username alice already exists");
    }

    #[tokio::test]
    async fn not_found_is_404_with_username() {
        let err = ApiError::NotFound {
            username: "bob".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "user with username bob does not exist");
    }

    #[tokio::test]
    async fn storage_error_is_500_with_generic_body() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "an internal error occurred");
    }

    #[tokio::test]
    async fn domain_errors_keep_their_status_through_from() {
        let err = ApiError::from(DbError::DuplicateUsername("alice".into()));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);

        let err = ApiError::from(DbError::UserNotFound("bob".into()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
