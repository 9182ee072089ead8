//! Update contract for jobs

use wf_core::error::ValidationErrors;
use wf_core::traits::Id;
use wf_core::{WfError, WfResult};
use wf_models::{Job, JobPatch, JobStatus};

use super::base::JobBaseContract;
use super::transitions::check_transition;
use crate::base::{Contract, ValidationResult};

/// Contract for patching an existing job.
///
/// Besides field rules it guards the status allow-list and keeps
/// `assignedTo` consistent with the status the job ends up in.
pub struct UpdateJobContract<'a, F> {
    job: &'a Job,
    base: JobBaseContract<F>,
}

impl<'a, F> UpdateJobContract<'a, F>
where
    F: Fn(Id) -> bool,
{
    pub fn new(job: &'a Job, worker_exists: F) -> Self {
        Self {
            job,
            base: JobBaseContract::new(worker_exists),
        }
    }

    /// Status the job will have once `patch` is applied
    pub fn target_status(&self, patch: &JobPatch) -> JobStatus {
        patch.status.unwrap_or(self.job.status)
    }

    /// Assignee the job will have once `patch` is applied
    pub fn target_assignee(&self, patch: &JobPatch) -> Option<Id> {
        match patch.assigned_to {
            Some(assigned_to) => assigned_to,
            None => self.job.assigned_to,
        }
    }

    fn validate_assignment(&self, patch: &JobPatch, errors: &mut ValidationErrors) {
        let target = self.target_status(patch);
        match target {
            JobStatus::Pending | JobStatus::Cancelled => {
                if let Some(Some(_)) = patch.assigned_to {
                    errors.add("assignedTo", format!("can't be set on a {} job", target));
                }
            }
            JobStatus::Assigned | JobStatus::InProgress => {
                self.base
                    .validate_assignee(target, self.target_assignee(patch), errors);
            }
            JobStatus::Completed => {
                if matches!(patch.assigned_to, Some(a) if a != self.job.assigned_to) {
                    errors.add("assignedTo", "can't be changed on a completed job");
                }
            }
        }
    }

    /// Check the transition and the payload, then return the patch that
    /// should actually be written.
    ///
    /// Moving back to `pending` or to `cancelled` drops the assignee.
    pub fn prepare(&self, mut patch: JobPatch) -> WfResult<JobPatch>
    where
        F: Send + Sync,
    {
        let target = self.target_status(&patch);
        check_transition(self.job.status, target)?;
        self.validate(&patch).map_err(WfError::Validation)?;

        if matches!(target, JobStatus::Pending | JobStatus::Cancelled) {
            patch.assigned_to = Some(None);
        }
        Ok(patch)
    }
}

impl<F> Contract<JobPatch> for UpdateJobContract<'_, F>
where
    F: Fn(Id) -> bool + Send + Sync,
{
    fn validate(&self, entity: &JobPatch) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if let Some(title) = &entity.title {
            self.base.validate_title(title, &mut errors);
        }
        if let Some(location) = &entity.location {
            self.base.validate_location(location, &mut errors);
        }
        if let Some(Some(hours)) = entity.estimated_duration {
            self.base
                .validate_hours("estimatedDuration", Some(f64::from(hours)), &mut errors);
        }
        self.base
            .validate_hours("actualDuration", entity.actual_duration.flatten(), &mut errors);
        self.validate_assignment(entity, &mut errors);

        errors.into_result()
    }
}
