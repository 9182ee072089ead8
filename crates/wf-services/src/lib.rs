//! # wf-services
//!
//! Domain operations for Workforce Dispatch.
//!
//! Each write operation is a service object built from a [`ServiceContext`]
//! (store, acting user, clock) and run with [`Callable::call`]. Role checks,
//! contract validation, the store write and any activity-log entry happen
//! inside the service. Read-only operations are plain functions over the
//! same context.

pub mod activities;
pub mod auth;
pub mod base;
pub mod dashboard;
pub mod job_reports;
pub mod jobs;
pub mod time_tracking;
pub mod users;
pub mod workers;

pub use activities::recent_activities;
pub use auth::{LoginParams, LoginService};
pub use base::{Callable, ServiceContext};
pub use dashboard::{completion_chart, metrics, CompletionChart, DashboardMetrics};
pub use job_reports::{list_job_reports, JobReportFilter, SubmitJobReportService};
pub use jobs::{list_jobs, my_jobs, CreateJobService, JobFilter, UpdateJobService};
pub use time_tracking::{
    current_time_tracking, my_time_tracking, ClockInParams, ClockInService, ClockOutParams,
    ClockOutService,
};
pub use users::{list_users, CreateUserService};
pub use workers::{list_workers, my_worker, CreateWorkerService, UpdateWorkerService};
