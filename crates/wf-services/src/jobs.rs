//! Job services
//!
//! Creation and updates run their contract check, the write and the
//! activity entry under a single store write, so a concurrent request can
//! never observe a job whose status change has not been narrated yet.

use serde::Deserialize;
use wf_contracts::jobs::{CreateJobContract, UpdateJobContract};
use wf_contracts::Contract;
use wf_core::{Id, OptionExt, WfError, WfResult};
use wf_models::{
    ActivitySubject, ActivityType, Job, JobPatch, JobStatus, NewActivity, NewJob, Role,
};
use wf_store::Tables;

use crate::base::{blank_as_none, own_worker, worker_name, Callable, ServiceContext};

/// Service for creating jobs (admin and HR)
pub struct CreateJobService<'a> {
    ctx: ServiceContext<'a>,
}

impl<'a> CreateJobService<'a> {
    pub fn new(ctx: ServiceContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Callable<NewJob> for CreateJobService<'_> {
    type Output = Job;

    fn call(self, params: NewJob) -> WfResult<Job> {
        self.ctx.require_role(&[Role::Admin, Role::Hr])?;
        let actor = self.ctx.user;
        let now = self.ctx.now;

        let job = self.ctx.store.write(|tables| {
            CreateJobContract::new(|id| tables.worker(id).is_some())
                .validate(&params)
                .map_err(WfError::Validation)?;

            let job = tables.create_job(params, actor.id, now);
            tables.create_activity(
                NewActivity::new(
                    ActivityType::JobCreated,
                    actor.id,
                    format!("{} created job: {}", actor.name, job.title),
                )
                .about(ActivitySubject::Job(job.id))
                .with_metadata("jobType", job.job_type.to_string())
                .with_metadata("priority", job.priority.as_str()),
                now,
            );
            Ok::<_, WfError>(job)
        })?;

        tracing::info!(
            job_id = job.id,
            status = %job.status,
            created_by = actor.id,
            "job created"
        );
        Ok(job)
    }
}

/// Service for patching a job, including status transitions
pub struct UpdateJobService<'a> {
    ctx: ServiceContext<'a>,
    job_id: Id,
}

impl<'a> UpdateJobService<'a> {
    pub fn new(ctx: ServiceContext<'a>, job_id: Id) -> Self {
        Self { ctx, job_id }
    }
}

impl Callable<JobPatch> for UpdateJobService<'_> {
    type Output = Job;

    fn call(self, params: JobPatch) -> WfResult<Job> {
        let actor = self.ctx.user;
        let now = self.ctx.now;
        let job_id = self.job_id;

        let (before, after) = self.ctx.store.write(|tables| {
            let before = tables.job(job_id).cloned().or_not_found("Job", job_id)?;
            let patch =
                UpdateJobContract::new(&before, |id| tables.worker(id).is_some()).prepare(params)?;

            let after = tables.update_job(job_id, patch).or_not_found("Job", job_id)?;
            if let Some(activity) = narrate_status_change(tables, &actor.name, actor.id, &before, &after)
            {
                tables.create_activity(activity, now);
            }
            Ok::<_, WfError>((before, after))
        })?;

        if before.status != after.status {
            tracing::info!(
                job_id,
                from = %before.status,
                to = %after.status,
                assigned_to = ?after.assigned_to,
                "job status changed"
            );
        } else {
            tracing::debug!(job_id, "job updated");
        }
        Ok(after)
    }
}

/// Activity describing a status change, if the change is one the feed shows
fn narrate_status_change(
    tables: &Tables,
    actor_name: &str,
    actor_id: Id,
    before: &Job,
    after: &Job,
) -> Option<NewActivity> {
    if before.status == after.status {
        return None;
    }

    let (activity_type, description) = match after.status {
        JobStatus::Assigned => {
            let worker = after
                .assigned_to
                .map(|worker_id| worker_name(tables, worker_id))
                .unwrap_or_else(|| "Unknown".to_string());
            (
                ActivityType::JobAssigned,
                format!("{} assigned job to {}", actor_name, worker),
            )
        }
        JobStatus::InProgress => (
            ActivityType::JobStarted,
            format!("{} started job: {}", actor_name, after.title),
        ),
        JobStatus::Completed => (
            ActivityType::JobCompleted,
            format!("{} completed job: {}", actor_name, after.title),
        ),
        JobStatus::Pending | JobStatus::Cancelled => return None,
    };

    Some(
        NewActivity::new(activity_type, actor_id, description)
            .about(ActivitySubject::Job(after.id))
            .with_metadata("oldStatus", before.status.as_str())
            .with_metadata("newStatus", after.status.as_str()),
    )
}

/// Query-string filters for the job list. Both filters must match.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status: Option<JobStatus>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub worker_id: Option<Id>,
}

pub fn list_jobs(ctx: ServiceContext<'_>, filter: &JobFilter) -> Vec<Job> {
    let jobs = ctx.store.read(|tables| match filter.worker_id {
        Some(worker_id) => tables.jobs_by_worker(worker_id),
        None => tables.jobs(),
    });
    jobs.into_iter()
        .filter(|job| filter.status.map_or(true, |status| job.status == status))
        .collect()
}

/// Jobs assigned to the acting worker
pub fn my_jobs(ctx: ServiceContext<'_>) -> WfResult<Vec<Job>> {
    ctx.require_role(&[Role::Worker])?;
    ctx.store.read(|tables| {
        let worker = own_worker(tables, ctx.user.id)?;
        Ok(tables.jobs_by_worker(worker.id))
    })
}
