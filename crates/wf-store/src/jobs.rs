//! Job table operations

use chrono::{DateTime, Utc};
use wf_core::traits::Id;
use wf_models::{Job, JobPatch, JobStatus, NewJob};

use crate::store::Tables;

impl Tables {
    pub fn create_job(&mut self, new: NewJob, created_by: Id, now: DateTime<Utc>) -> Job {
        let job = Job {
            id: self.next_id(),
            title: new.title,
            description: new.description,
            job_type: new.job_type,
            priority: new.priority,
            status: new.status,
            location: new.location,
            assigned_to: new.assigned_to,
            created_by,
            customer_name: new.customer_name,
            customer_phone: new.customer_phone,
            estimated_duration: new.estimated_duration,
            actual_duration: None,
            scheduled_at: new.scheduled_at,
            started_at: None,
            completed_at: None,
            created_at: now,
        };
        tracing::debug!(job_id = job.id, status = %job.status, "job stored");
        self.jobs.insert(job)
    }

    pub fn job(&self, id: Id) -> Option<&Job> {
        self.jobs.get(id)
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.all()
    }

    pub fn jobs_by_worker(&self, worker_id: Id) -> Vec<Job> {
        self.jobs.filter(|j| j.assigned_to == Some(worker_id))
    }

    pub fn jobs_by_status(&self, status: JobStatus) -> Vec<Job> {
        self.jobs.filter(|j| j.status == status)
    }

    /// Merge `patch` over the stored job. No validation happens here.
    pub fn update_job(&mut self, id: Id, patch: JobPatch) -> Option<Job> {
        self.jobs.update(id, |job| patch.apply(job))
    }

    /// Borrow the job table directly, for aggregate scans
    pub fn job_rows(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }
}
