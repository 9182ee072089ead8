//! Job report handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use wf_models::NewJobReport;
use wf_services::{list_job_reports as reports_matching, Callable, JobReportFilter, SubmitJobReportService};

use crate::error::{json_body, query_params, ApiResult, ResultExt};
use crate::extractors::{AppState, AuthenticatedUser};

/// GET /api/job-reports?jobId=&workerId=
pub async fn list_job_reports(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    query: Result<Query<JobReportFilter>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let filter = query_params(query)?;
    Ok(Json(reports_matching(state.context(&user), &filter)))
}

/// POST /api/job-reports
pub async fn submit_job_report(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<NewJobReport>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let params = json_body(payload, "Invalid report data")?;
    let report = SubmitJobReportService::new(state.context(&user))
        .call(params)
        .invalid_as("Invalid report data")?;
    Ok((StatusCode::CREATED, Json(report)))
}
