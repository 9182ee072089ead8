//! Job model
//!
//! A job is a unit of field work. Its lifecycle is
//! `pending -> assigned -> in_progress -> completed`, with `cancelled`
//! reachable from every non-terminal state. The allowed edges live in
//! `wf-contracts`; this module only describes the data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;
use wf_core::traits::{Entity, Id, Identifiable};

use crate::location::JobLocation;
use crate::patch::{double_option, patch_hours};
use crate::trade::Trade;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobPriority {
    #[default]
    Normal,
    High,
    Urgent,
}

impl JobPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobPriority::Normal => "normal",
            JobPriority::High => "high",
            JobPriority::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Pending,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Pending,
        JobStatus::Assigned,
        JobStatus::InProgress,
        JobStatus::Completed,
        JobStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Assigned => "assigned",
            JobStatus::InProgress => "in_progress",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
        }
    }

    /// Whether a job in this status carries an assignee
    pub fn requires_assignee(&self) -> bool {
        matches!(self, JobStatus::Assigned | JobStatus::InProgress)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown job status '{}'", s))
    }
}

/// Job entity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Id,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Trade,
    pub priority: JobPriority,
    pub status: JobStatus,
    pub location: JobLocation,
    /// Worker id. Present exactly when status is assigned or in_progress
    /// (completed jobs keep the worker who did them).
    pub assigned_to: Option<Id>,
    /// User id of the creator
    pub created_by: Id,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    /// Hours
    pub estimated_duration: Option<i32>,
    /// Hours, written as a JSON number. PATCH also accepts a decimal string.
    pub actual_duration: Option<f64>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for Job {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Job {
    const TYPE_NAME: &'static str = "Job";
}

/// Payload for creating a job (admin / hr)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    #[validate(length(min = 1, max = 255, message = "can't be blank"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub job_type: Trade,

    #[serde(default)]
    pub priority: JobPriority,

    #[serde(default)]
    pub status: JobStatus,

    #[validate]
    pub location: JobLocation,

    #[serde(default)]
    pub assigned_to: Option<Id>,

    #[serde(default)]
    pub customer_name: Option<String>,

    #[serde(default)]
    pub customer_phone: Option<String>,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub estimated_duration: Option<i32>,

    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// Partial update of a job.
///
/// Nullable columns use `Option<Option<T>>`: absent leaves the value alone,
/// `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    pub title: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[serde(rename = "type")]
    pub job_type: Option<Trade>,

    pub priority: Option<JobPriority>,
    pub status: Option<JobStatus>,
    pub location: Option<JobLocation>,

    #[serde(default, deserialize_with = "double_option")]
    pub assigned_to: Option<Option<Id>>,

    #[serde(default, deserialize_with = "double_option")]
    pub customer_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub customer_phone: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub estimated_duration: Option<Option<i32>>,

    #[serde(default, deserialize_with = "patch_hours")]
    pub actual_duration: Option<Option<f64>>,

    #[serde(default, deserialize_with = "double_option")]
    pub scheduled_at: Option<Option<DateTime<Utc>>>,

    #[serde(default, deserialize_with = "double_option")]
    pub started_at: Option<Option<DateTime<Utc>>>,

    #[serde(default, deserialize_with = "double_option")]
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

impl JobPatch {
    /// Patch that only moves the job to `status`
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Patch that assigns the job to `worker_id`
    pub fn assign(worker_id: Id) -> Self {
        Self {
            status: Some(JobStatus::Assigned),
            assigned_to: Some(Some(worker_id)),
            ..Default::default()
        }
    }

    /// Write every present field onto `job`
    pub fn apply(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(job_type) = self.job_type {
            job.job_type = job_type;
        }
        if let Some(priority) = self.priority {
            job.priority = priority;
        }
        if let Some(status) = self.status {
            job.status = status;
        }
        if let Some(location) = self.location {
            job.location = location;
        }
        if let Some(assigned_to) = self.assigned_to {
            job.assigned_to = assigned_to;
        }
        if let Some(customer_name) = self.customer_name {
            job.customer_name = customer_name;
        }
        if let Some(customer_phone) = self.customer_phone {
            job.customer_phone = customer_phone;
        }
        if let Some(estimated_duration) = self.estimated_duration {
            job.estimated_duration = estimated_duration;
        }
        if let Some(actual_duration) = self.actual_duration {
            job.actual_duration = actual_duration;
        }
        if let Some(scheduled_at) = self.scheduled_at {
            job.scheduled_at = scheduled_at;
        }
        if let Some(started_at) = self.started_at {
            job.started_at = started_at;
        }
        if let Some(completed_at) = self.completed_at {
            job.completed_at = completed_at;
        }
    }
}
