//! Session handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use wf_auth::CurrentUser;
use wf_services::{Callable, LoginParams, LoginService};

use crate::error::{json_body, ApiError, ApiResult, ResultExt};
use crate::extractors::{cookie_header, AppState, AuthenticatedUser};

#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: CurrentUser,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginParams>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let params = json_body(payload, "Invalid request data")?;

    let login_state = state.clone();
    let session = tokio::task::spawn_blocking(move || {
        LoginService::new(&login_state.store, &login_state.authenticator).call(params)
    })
    .await
    .map_err(|e| ApiError::internal(format!("login task failed: {}", e)))?
    .invalid_as("Invalid request data")?;

    let cookie = state.authenticator.cookie().build_cookie(&session.id);
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(UserEnvelope { user: session.user }),
    ))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    state.authenticator.end_session(cookie_header(&headers));
    (
        [(header::SET_COOKIE, state.authenticator.cookie().build_clear_cookie())],
        Json(MessageResponse {
            message: "Logged out successfully",
        }),
    )
}

/// GET /api/auth/me
pub async fn me(user: Option<AuthenticatedUser>) -> ApiResult<Json<UserEnvelope>> {
    let AuthenticatedUser(user) = user.ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;
    Ok(Json(UserEnvelope { user }))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use axum::http::{header, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_login_sets_session_cookie() {
        let app = TestApp::new();

        let response = app
            .request(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({"username": "admin", "password": "admin123", "role": "admin"})),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["user"]["role"], "admin");
        assert_eq!(response.body["user"]["name"], "Admin User");
        let cookie = response.headers[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("wf_session="));
        assert!(cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn test_login_with_wrong_role_is_unauthorized() {
        let app = TestApp::new();

        let response = app
            .request(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({"username": "admin", "password": "admin123", "role": "hr"})),
            )
            .await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_malformed_login_body() {
        let app = TestApp::new();

        let response = app
            .request(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({"username": "admin", "role": "superuser"})),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["message"], "Invalid request data");
    }

    #[tokio::test]
    async fn test_me_and_logout() {
        let app = TestApp::new();
        let cookie = app.login("hr.manager", "hr123", "hr").await;

        let me = app.get("/api/auth/me", Some(&cookie)).await;
        assert_eq!(me.status, StatusCode::OK);
        assert_eq!(me.body["user"]["username"], "hr.manager");

        let out = app.request("POST", "/api/auth/logout", Some(&cookie), None).await;
        assert_eq!(out.status, StatusCode::OK);
        assert_eq!(out.body["message"], "Logged out successfully");

        let me = app.get("/api/auth/me", Some(&cookie)).await;
        assert_eq!(me.status, StatusCode::UNAUTHORIZED);
        assert_eq!(me.body["message"], "Not authenticated");
    }
}
