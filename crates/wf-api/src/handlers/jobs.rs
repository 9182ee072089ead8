//! Job handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use wf_core::Id;
use wf_models::{JobPatch, NewJob};
use wf_services::{
    list_jobs as jobs_matching, my_jobs as own_jobs, Callable, CreateJobService, JobFilter,
    UpdateJobService,
};

use crate::error::{json_body, query_params, ApiError, ApiResult, ResultExt};
use crate::extractors::{AppState, AuthenticatedUser};
use crate::representers::JobRepresentation;

/// GET /api/jobs?status=&workerId=
pub async fn list_jobs(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    query: Result<Query<JobFilter>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let filter = query_params(query)?;
    let jobs = jobs_matching(state.context(&user), &filter);
    let body = state
        .store
        .read(|tables| JobRepresentation::collection(tables, jobs));
    Ok(Json(body))
}

/// GET /api/jobs/my
pub async fn my_jobs(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    let jobs = own_jobs(state.context(&user))?;
    let body = state
        .store
        .read(|tables| JobRepresentation::collection(tables, jobs));
    Ok(Json(body))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<NewJob>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let params = json_body(payload, "Invalid job data")?;
    let job = CreateJobService::new(state.context(&user))
        .call(params)
        .invalid_as("Invalid job data")?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PATCH /api/jobs/:id
pub async fn update_job(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    id: Result<Path<Id>, PathRejection>,
    payload: Result<Json<JobPatch>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id.map_err(|_| ApiError::not_found("Job"))?;
    let patch = json_body(payload, "Invalid update data")?;
    let job = UpdateJobService::new(state.context(&user), id)
        .call(patch)
        .invalid_as("Invalid update data")?;
    Ok(Json(job))
}
