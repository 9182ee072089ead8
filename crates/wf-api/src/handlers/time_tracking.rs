//! Time tracking handlers (workers only)

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use wf_services::{
    current_time_tracking as open_shift, my_time_tracking as shifts_of, Callable, ClockInParams,
    ClockInService, ClockOutParams, ClockOutService,
};

use crate::error::{json_body, query_params, ApiResult, ResultExt};
use crate::extractors::{AppState, AuthenticatedUser};

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// `YYYY-MM-DD`
    pub date: Option<NaiveDate>,
}

/// GET /api/time-tracking/my?date=
pub async fn my_time_tracking(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let query = query_params(query)?;
    Ok(Json(shifts_of(state.context(&user), query.date)?))
}

/// GET /api/time-tracking/current
pub async fn current_time_tracking(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(open_shift(state.context(&user))?))
}

/// An absent body counts as an empty one
fn body_or_default<T: Default>(
    payload: Result<Json<T>, JsonRejection>,
    message: &'static str,
) -> ApiResult<T> {
    match payload {
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        other => json_body(other, message),
    }
}

/// POST /api/time-tracking/clock-in
pub async fn clock_in(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<ClockInParams>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let params = body_or_default(payload, "Invalid request data")?;
    let record = ClockInService::new(state.context(&user))
        .call(params)
        .invalid_as("Invalid request data")?;
    Ok(Json(record))
}

/// POST /api/time-tracking/clock-out
pub async fn clock_out(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<ClockOutParams>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let params = body_or_default(payload, "Invalid request data")?;
    let record = ClockOutService::new(state.context(&user))
        .call(params)
        .invalid_as("Invalid request data")?;
    Ok(Json(record))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_clock_in_then_out() {
        let app = TestApp::new();
        let john = app.login("john.doe", "worker123", "worker").await;

        let none = app.get("/api/time-tracking/current", Some(&john)).await;
        assert_eq!(none.status, StatusCode::OK);
        assert!(none.body.is_null());

        let clocked_in = app
            .request(
                "POST",
                "/api/time-tracking/clock-in",
                Some(&john),
                Some(json!({"location": {"lat": 40.71, "lng": -74.0}})),
            )
            .await;
        assert_eq!(clocked_in.status, StatusCode::OK);
        assert!(clocked_in.body["clockOutTime"].is_null());

        let current = app.get("/api/time-tracking/current", Some(&john)).await;
        assert_eq!(current.body["id"], clocked_in.body["id"]);
        let me = app.get("/api/workers/me", Some(&john)).await;
        assert_eq!(me.body["status"], "working");

        let clocked_out = app
            .request("POST", "/api/time-tracking/clock-out", Some(&john), None)
            .await;
        assert_eq!(clocked_out.status, StatusCode::OK);
        assert!(clocked_out.body["clockOutTime"].is_string());

        let current = app.get("/api/time-tracking/current", Some(&john)).await;
        assert!(current.body.is_null());
        let me = app.get("/api/workers/me", Some(&john)).await;
        assert_eq!(me.body["status"], "available");
    }

    #[tokio::test]
    async fn test_invariant_violations() {
        let app = TestApp::new();
        let sarah = app.login("sarah.wilson", "worker123", "worker").await;

        let not_in = app
            .request("POST", "/api/time-tracking/clock-out", Some(&sarah), Some(json!({})))
            .await;
        assert_eq!(not_in.status, StatusCode::BAD_REQUEST);
        assert_eq!(not_in.body["message"], "Not clocked in");
        let me = app.get("/api/workers/me", Some(&sarah)).await;
        assert_eq!(me.body["status"], "available");

        app.request("POST", "/api/time-tracking/clock-in", Some(&sarah), Some(json!({})))
            .await;
        let twice = app
            .request("POST", "/api/time-tracking/clock-in", Some(&sarah), Some(json!({})))
            .await;
        assert_eq!(twice.status, StatusCode::BAD_REQUEST);
        assert_eq!(twice.body["message"], "Already clocked in");

        let history = app.get("/api/time-tracking/my", Some(&sarah)).await;
        assert_eq!(history.body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_history_date_filter() {
        let app = TestApp::new();
        let mike = app.login("mike.smith", "worker123", "worker").await;
        app.request("POST", "/api/time-tracking/clock-in", Some(&mike), None)
            .await;

        let today = chrono::Utc::now().date_naive();
        let found = app
            .get(&format!("/api/time-tracking/my?date={today}"), Some(&mike))
            .await;
        assert_eq!(found.body.as_array().unwrap().len(), 1);

        let empty = app
            .get("/api/time-tracking/my?date=2001-01-01", Some(&mike))
            .await;
        assert!(empty.body.as_array().unwrap().is_empty());

        let bad = app
            .get("/api/time-tracking/my?date=yesterday", Some(&mike))
            .await;
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    }
}
