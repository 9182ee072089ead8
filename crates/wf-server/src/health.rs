//! Health checks
//!
//! Reports on the entity store and the session store. Both live in
//! process memory, so a report is cheap and never cached.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wf_auth::MemorySessionStore;
use wf_store::MemoryStore;

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy | Self::Degraded)
    }
}

/// Individual component health
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Overall health report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: Vec<ComponentHealth>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    pub fn http_status(&self) -> StatusCode {
        if self.status.is_healthy() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Health checker service
pub struct HealthChecker {
    start_time: Instant,
    store: Arc<MemoryStore>,
    sessions: Arc<MemorySessionStore>,
}

impl HealthChecker {
    pub fn new(store: Arc<MemoryStore>, sessions: Arc<MemorySessionStore>) -> Self {
        Self {
            start_time: Instant::now(),
            store,
            sessions,
        }
    }

    pub fn check(&self) -> HealthReport {
        let components = vec![self.check_store(), self.check_sessions()];
        let status = if components.iter().all(|c| c.status == HealthStatus::Healthy) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        };
        debug!(?status, "Health check performed");

        HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            components,
            timestamp: chrono::Utc::now(),
        }
    }

    fn check_store(&self) -> ComponentHealth {
        let (users, workers, jobs) = self.store.read(|tables| {
            (
                tables.users().len(),
                tables.workers().len(),
                tables.job_rows().count(),
            )
        });

        ComponentHealth {
            name: "store".to_string(),
            status: HealthStatus::Healthy,
            details: Some(serde_json::json!({
                "users": users,
                "workers": workers,
                "jobs": jobs,
            })),
        }
    }

    fn check_sessions(&self) -> ComponentHealth {
        ComponentHealth {
            name: "sessions".to_string(),
            status: HealthStatus::Healthy,
            details: Some(serde_json::json!({ "active": self.sessions.len() })),
        }
    }
}

/// Simple liveness check
pub async fn liveness() -> &'static str {
    "OK"
}

/// Full health check
pub async fn health(State(checker): State<Arc<HealthChecker>>) -> (StatusCode, Json<HealthReport>) {
    let report = checker.check();
    (report.http_status(), Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: HealthStatus) -> HealthReport {
        HealthReport {
            status,
            version: "1.0".to_string(),
            uptime_seconds: 100,
            components: vec![],
            timestamp: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_health_check_counts_store_rows() {
        let checker = HealthChecker::new(
            Arc::new(MemoryStore::new()),
            Arc::new(MemorySessionStore::new()),
        );
        let report = checker.check();

        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.components.len(), 2);
        assert_eq!(report.components[0].name, "store");
        assert_eq!(report.components[0].details.as_ref().unwrap()["jobs"], 0);
        assert_eq!(report.components[1].details.as_ref().unwrap()["active"], 0);
    }

    #[test]
    fn test_health_status_http() {
        assert_eq!(report(HealthStatus::Healthy).http_status(), StatusCode::OK);
        assert_eq!(report(HealthStatus::Degraded).http_status(), StatusCode::OK);
        assert_eq!(
            report(HealthStatus::Unhealthy).http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(report(HealthStatus::Healthy)).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["uptimeSeconds"], 100);
    }
}
