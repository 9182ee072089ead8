//! Dashboard aggregates
//!
//! Both aggregates are computed on request from a single read of the store.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::Serialize;
use wf_models::{JobStatus, Role};
use wf_store::Tables;

use crate::base::ServiceContext;

const CHART_MONTHS: u32 = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    #[serde(rename = "totalHRs")]
    pub total_hrs: usize,
    pub total_workers: usize,
    pub jobs_assigned: usize,
    pub jobs_pending: usize,
    /// Jobs in progress
    pub active_jobs: usize,
    /// Jobs whose `completedAt` falls on today's UTC date
    pub completed_today: usize,
    pub available_workers: usize,
    pub pending_assignment: usize,
}

/// Completed jobs per calendar month, oldest month first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionChart {
    pub labels: Vec<String>,
    pub data: Vec<usize>,
}

pub fn metrics(ctx: ServiceContext<'_>) -> DashboardMetrics {
    let today = ctx.now.date_naive();
    ctx.store.read(|tables| compute_metrics(tables, today))
}

fn compute_metrics(tables: &Tables, today: NaiveDate) -> DashboardMetrics {
    let mut metrics = DashboardMetrics {
        total_hrs: tables.users_with_role(Role::Hr).len(),
        ..Default::default()
    };

    for worker in tables.workers() {
        metrics.total_workers += 1;
        if worker.is_available() {
            metrics.available_workers += 1;
        }
    }

    for job in tables.job_rows() {
        match job.status {
            JobStatus::Pending => metrics.jobs_pending += 1,
            JobStatus::Assigned => metrics.jobs_assigned += 1,
            JobStatus::InProgress => metrics.active_jobs += 1,
            JobStatus::Completed | JobStatus::Cancelled => {}
        }
        if job.completed_at.is_some_and(|at| at.date_naive() == today) {
            metrics.completed_today += 1;
        }
    }
    metrics.pending_assignment = metrics.jobs_pending;

    tracing::debug!(?metrics, "dashboard metrics computed");
    metrics
}

pub fn completion_chart(ctx: ServiceContext<'_>) -> CompletionChart {
    ctx.store.read(|tables| compute_completion_chart(tables, ctx.now))
}

fn compute_completion_chart(tables: &Tables, now: DateTime<Utc>) -> CompletionChart {
    let this_month = NaiveDate::from_ymd_opt(now.year(), now.month(), 1).unwrap_or(NaiveDate::MIN);
    let months: Vec<NaiveDate> = (0..CHART_MONTHS)
        .rev()
        .filter_map(|back| this_month.checked_sub_months(Months::new(back)))
        .collect();

    let data = months
        .iter()
        .map(|month| {
            tables
                .job_rows()
                .filter(|job| job.status == JobStatus::Completed)
                .filter_map(|job| job.completed_at)
                .filter(|at| at.year() == month.year() && at.month() == month.month())
                .count()
        })
        .collect();

    CompletionChart {
        labels: months.iter().map(|m| m.format("%b").to_string()).collect(),
        data,
    }
}
