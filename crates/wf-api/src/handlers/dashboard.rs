//! Dashboard handlers

use axum::{extract::State, Json};
use wf_services::{completion_chart, metrics, CompletionChart, DashboardMetrics};

use crate::extractors::{AppState, AuthenticatedUser};

/// GET /api/dashboard/metrics
pub async fn dashboard_metrics(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Json<DashboardMetrics> {
    Json(metrics(state.context(&user)))
}

/// GET /api/dashboard/job-completion-chart
pub async fn job_completion_chart(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Json<CompletionChart> {
    Json(completion_chart(state.context(&user)))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_metrics_follow_job_updates() {
        let app = TestApp::new();
        let admin = app.login("admin", "admin123", "admin").await;
        let mike = app.login("mike.smith", "worker123", "worker").await;

        let before = app.get("/api/dashboard/metrics", Some(&admin)).await;
        assert_eq!(before.status, StatusCode::OK);
        assert_eq!(before.body["totalHRs"], 1);
        assert_eq!(before.body["totalWorkers"], 3);
        assert_eq!(before.body["activeJobs"], 1);
        assert_eq!(before.body["availableWorkers"], 2);
        assert_eq!(before.body["pendingAssignment"], 1);

        let job_id = app.get("/api/jobs/my", Some(&mike)).await.body[0]["id"]
            .as_i64()
            .unwrap();
        let done = app
            .request(
                "PATCH",
                &format!("/api/jobs/{job_id}"),
                Some(&mike),
                Some(json!({
                    "status": "completed",
                    "completedAt": chrono::Utc::now().to_rfc3339(),
                })),
            )
            .await;
        assert_eq!(done.status, StatusCode::OK);

        let after = app.get("/api/dashboard/metrics", Some(&admin)).await;
        assert_eq!(after.body["activeJobs"], 0);
        assert_eq!(after.body["completedToday"], 1);

        let chart = app.get("/api/dashboard/job-completion-chart", Some(&admin)).await;
        assert_eq!(chart.body["labels"].as_array().unwrap().len(), 6);
        assert_eq!(chart.body["data"][5], 1);
    }
}
