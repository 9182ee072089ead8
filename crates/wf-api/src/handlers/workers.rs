//! Worker handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use wf_core::Id;
use wf_models::{NewWorker, WorkerPatch};
use wf_services::{
    list_workers as workers_of, my_worker as own_profile, Callable, CreateWorkerService,
    UpdateWorkerService,
};

use crate::error::{json_body, ApiError, ApiResult, ResultExt};
use crate::extractors::{AppState, AuthenticatedUser};
use crate::representers::WorkerRepresentation;

/// GET /api/workers
pub async fn list_workers(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    let workers = workers_of(state.context(&user));
    let body = state
        .store
        .read(|tables| WorkerRepresentation::collection(tables, workers));
    Ok(Json(body))
}

/// GET /api/workers/me
pub async fn my_worker(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    let worker = own_profile(state.context(&user))?;
    Ok(Json(worker))
}

/// POST /api/workers
pub async fn create_worker(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<NewWorker>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let params = json_body(payload, "Invalid worker data")?;
    let worker = CreateWorkerService::new(state.context(&user))
        .call(params)
        .invalid_as("Invalid worker data")?;
    Ok((StatusCode::CREATED, Json(worker)))
}

/// PATCH /api/workers/:id
pub async fn update_worker(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    id: Result<Path<Id>, PathRejection>,
    payload: Result<Json<WorkerPatch>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id.map_err(|_| ApiError::not_found("Worker"))?;
    let patch = json_body(payload, "Invalid update data")?;
    let worker = UpdateWorkerService::new(state.context(&user), id)
        .call(patch)
        .invalid_as("Invalid update data")?;
    Ok(Json(worker))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_workers_carry_their_user() {
        let app = TestApp::new();
        let cookie = app.login("hr.manager", "hr123", "hr").await;

        let response = app.get("/api/workers", Some(&cookie)).await;
        assert_eq!(response.status, StatusCode::OK);
        let workers = response.body.as_array().unwrap();
        assert_eq!(workers.len(), 3);
        assert_eq!(workers[1]["user"]["name"], "Mike Smith");
        assert_eq!(workers[1]["status"], "working");
    }

    #[tokio::test]
    async fn test_my_worker_profile() {
        let app = TestApp::new();
        let sarah = app.login("sarah.wilson", "worker123", "worker").await;
        let admin = app.login("admin", "admin123", "admin").await;

        let response = app.get("/api/workers/me", Some(&sarah)).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["specialty"], "hvac");

        let response = app.get("/api/workers/me", Some(&admin)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_create_and_patch_worker() {
        let app = TestApp::new();
        let admin = app.login("admin", "admin123", "admin").await;
        let hr_id = app.state.store.read(|t| t.user_by_username("hr.manager").unwrap().id);

        let created = app
            .request(
                "POST",
                "/api/workers",
                Some(&admin),
                Some(json!({"userId": hr_id, "specialty": "electrical"})),
            )
            .await;
        assert_eq!(created.status, StatusCode::CREATED);
        assert_eq!(created.body["rating"], "0.00");
        assert_eq!(created.body["completedJobs"], 0);

        let id = created.body["id"].as_i64().unwrap();
        let patched = app
            .request(
                "PATCH",
                &format!("/api/workers/{id}"),
                Some(&admin),
                Some(json!({"location": {"lat": 40.74, "lng": -73.99}})),
            )
            .await;
        assert_eq!(patched.status, StatusCode::OK);
        assert_eq!(patched.body["location"]["lat"], 40.74);
        assert_eq!(patched.body["specialty"], "electrical");
    }

    #[tokio::test]
    async fn test_worker_errors() {
        let app = TestApp::new();
        let admin = app.login("admin", "admin123", "admin").await;

        let missing = app
            .request("PATCH", "/api/workers/999", Some(&admin), Some(json!({})))
            .await;
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.body["message"], "Worker not found");

        let invalid = app
            .request(
                "POST",
                "/api/workers",
                Some(&admin),
                Some(json!({"userId": 999, "specialty": "welding"})),
            )
            .await;
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.body["message"], "Invalid worker data");

        let bad_patch = app
            .request(
                "PATCH",
                "/api/workers/6",
                Some(&admin),
                Some(json!({"rating": "seven"})),
            )
            .await;
        assert_eq!(bad_patch.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad_patch.body["message"], "Invalid update data");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let app = TestApp::new();
        let admin = app.login("admin", "admin123", "admin").await;

        let response = app
            .request("PATCH", "/api/workers/abc", Some(&admin), Some(json!({"status": "offline"})))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body["message"], "Worker not found");
    }
}
