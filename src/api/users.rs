//! User management endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::{
    extract::{JsonBody, PathParam},
    log_unexpected,
};
use crate::{
    error::AppResult,
    models::{User, UserInput},
    AppState,
};

/// Create a new user; the password is stored hashed
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UserInput,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 500, description = "Hashing or storage failure")
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<UserInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state
        .services
        .users
        .add_user(data)
        .await
        .map_err(log_unexpected("add_user"))?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get user details by username
#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 401, description = "Missing or invalid access token"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(username): PathParam<String>,
) -> AppResult<Json<User>> {
    let user = state
        .services
        .users
        .get_user(&username)
        .await
        .map_err(log_unexpected("get_user"))?;
    Ok(Json(user))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/users/{username}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("username" = String, Path, description = "Username")),
    request_body = UserInput,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 500, description = "Hashing or storage failure, including a missing user")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathParam(username): PathParam<String>,
    JsonBody(data): JsonBody<UserInput>,
) -> AppResult<Json<User>> {
    let user = state
        .services
        .users
        .update_user(&username, data)
        .await
        .map_err(log_unexpected("update_user"))?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{username}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User deleted", body = String),
        (status = 401, description = "Missing or invalid access token"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(username): PathParam<String>,
) -> AppResult<Json<&'static str>> {
    state
        .services
        .users
        .delete_user(&username)
        .await
        .map_err(log_unexpected("delete_user"))?;
    Ok(Json("Deleted Successfully"))
}
