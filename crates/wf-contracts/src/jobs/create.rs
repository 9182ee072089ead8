//! Create contract for jobs

use wf_core::error::ValidationErrors;
use wf_core::traits::Id;
use wf_models::{JobStatus, NewJob};

use super::base::JobBaseContract;
use crate::base::{validate_fields, Contract, ValidationResult};

/// Contract for creating a job.
///
/// A new job starts either `pending` with no assignee or `assigned` to a
/// worker that exists.
pub struct CreateJobContract<F> {
    base: JobBaseContract<F>,
}

impl<F> CreateJobContract<F>
where
    F: Fn(Id) -> bool,
{
    pub fn new(worker_exists: F) -> Self {
        Self {
            base: JobBaseContract::new(worker_exists),
        }
    }

    fn validate_initial_status(&self, new: &NewJob, errors: &mut ValidationErrors) {
        match new.status {
            JobStatus::Pending => {
                if new.assigned_to.is_some() {
                    errors.add("assignedTo", "can't be set on a pending job");
                }
            }
            JobStatus::Assigned => {
                self.base
                    .validate_assignee(new.status, new.assigned_to, errors);
            }
            other => {
                errors.add("status", format!("can't be {} for a new job", other));
            }
        }
    }
}

impl<F> Contract<NewJob> for CreateJobContract<F>
where
    F: Fn(Id) -> bool + Send + Sync,
{
    fn validate(&self, entity: &NewJob) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        validate_fields(entity, &mut errors);
        self.base.validate_title(&entity.title, &mut errors);
        self.validate_initial_status(entity, &mut errors);

        errors.into_result()
    }
}
