//! User handlers (admin only)

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use wf_models::NewUser;
use wf_services::{list_users as users_of, Callable, CreateUserService, ServiceContext};

use crate::error::{json_body, ApiError, ApiResult, ResultExt};
use crate::extractors::{AppState, AuthenticatedUser};

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    let users = users_of(state.context(&user))?;
    Ok(Json(users))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let params = json_body(payload, "Invalid user data")?;

    // hashing the password is CPU-bound
    let created = tokio::task::spawn_blocking(move || {
        let ctx = ServiceContext::new(&state.store, &user);
        CreateUserService::new(ctx, state.authenticator.passwords()).call(params)
    })
    .await
    .map_err(|e| ApiError::internal(format!("user task failed: {}", e)))?
    .invalid_as("Invalid user data")?;

    Ok((StatusCode::CREATED, Json(created)))
}
