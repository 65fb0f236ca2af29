//! User endpoints
//!
//! POST /user, GET /users, DELETE /user?username=NAME. Each handler builds
//! the service over the shared pool, so nothing outlives the request.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::User;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Username, ValidationError};
use crate::service::UserService;

/// Create user request. Other User fields are ignored on input; the store
/// assigns the id.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

/// User response
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
        }
    }
}

#[derive(Deserialize)]
pub struct DeleteUserParams {
    pub username: Option<String>,
}

/// Delete confirmation response
#[derive(Serialize)]
pub struct DeleteUserResponse {
    pub message: &'static str,
}

/// POST /user - create a new user
async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    // Malformed bodies never reach storage.
    let Json(req) = payload.map_err(|_| ValidationError::InvalidBody)?;
    let username = Username::new(&req.username)?;

    let user = UserService::new(&state.pool).create(username).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /users - list all users
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserService::new(&state.pool)
        .list_all()
        .await
        .map_err(|err| {
            tracing::error!("failed to fetch users: {}", err);
            ApiError::Internal {
                message: "Failed to fetch users",
            }
        })?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// DELETE /user?username=NAME - delete a user by name
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteUserParams>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    let username = params
        .username
        .filter(|u| !u.is_empty())
        .ok_or(ValidationError::Missing { field: "username" })?;

    UserService::new(&state.pool)
        .delete_by_username(&username)
        .await?;

    Ok(Json(DeleteUserResponse {
        message: "User deleted successfully",
    }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user", post(create_user).delete(delete_user))
        .route("/users", get(list_users))
}
