//! API routes

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::extractors::AppState;
use crate::handlers::{
    activities, auth, dashboard, job_reports, jobs, time_tracking, users, workers,
};

/// Create the complete API router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api", api_router())
}

fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_router())
        .nest("/users", users_router())
        .nest("/workers", workers_router())
        .nest("/jobs", jobs_router())
        .route(
            "/job-reports",
            get(job_reports::list_job_reports).post(job_reports::submit_job_report),
        )
        .route("/activities", get(activities::list_activities))
        .nest("/time-tracking", time_tracking_router())
        .nest("/dashboard", dashboard_router())
}

fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

fn users_router() -> Router<AppState> {
    Router::new().route("/", get(users::list_users).post(users::create_user))
}

fn workers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(workers::list_workers).post(workers::create_worker))
        .route("/me", get(workers::my_worker))
        .route("/:id", patch(workers::update_worker))
}

fn jobs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::list_jobs).post(jobs::create_job))
        .route("/my", get(jobs::my_jobs))
        .route("/:id", patch(jobs::update_job))
}

fn time_tracking_router() -> Router<AppState> {
    Router::new()
        .route("/my", get(time_tracking::my_time_tracking))
        .route("/current", get(time_tracking::current_time_tracking))
        .route("/clock-in", post(time_tracking::clock_in))
        .route("/clock-out", post(time_tracking::clock_out))
}

fn dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(dashboard::dashboard_metrics))
        .route("/job-completion-chart", get(dashboard::job_completion_chart))
}
