//! Activity feed handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use wf_services::recent_activities;

use crate::error::{query_params, ApiResult};
use crate::extractors::{AppState, AuthenticatedUser};
use crate::representers::ActivityRepresentation;

#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    pub limit: Option<usize>,
}

/// GET /api/activities?limit=
pub async fn list_activities(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    query: Result<Query<FeedQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let query = query_params(query)?;
    let activities = recent_activities(state.context(&user), query.limit);
    let body = state
        .store
        .read(|tables| ActivityRepresentation::collection(tables, activities));
    Ok(Json(body))
}
