//! Validations shared by the job contracts

use validator::Validate;
use wf_core::error::ValidationErrors;
use wf_core::traits::Id;
use wf_models::{JobLocation, JobStatus};

use crate::base::validate_present;

/// Common job validations.
///
/// `worker_exists` resolves an assignee id against the worker table.
pub struct JobBaseContract<F> {
    worker_exists: F,
}

impl<F> JobBaseContract<F>
where
    F: Fn(Id) -> bool,
{
    pub fn new(worker_exists: F) -> Self {
        Self { worker_exists }
    }

    /// Title is present and within length
    pub fn validate_title(&self, title: &str, errors: &mut ValidationErrors) {
        validate_present("title", title, errors);
        if title.chars().count() > 255 && !errors.has_error("title") {
            errors.add("title", "is too long (maximum is 255 characters)");
        }
    }

    pub fn validate_location(&self, location: &JobLocation, errors: &mut ValidationErrors) {
        if let Err(field_errors) = location.validate() {
            let mut nested = ValidationErrors::new();
            for (field, messages) in ValidationErrors::from(field_errors).errors {
                for message in messages {
                    nested.add(format!("location.{}", field), message);
                }
            }
            errors.merge(nested);
        }
    }

    /// Durations are counted in hours and can't go negative
    pub fn validate_hours(&self, field: &str, hours: Option<f64>, errors: &mut ValidationErrors) {
        if let Some(h) = hours {
            if !h.is_finite() || h < 0.0 {
                errors.add(field, "must be greater than or equal to 0");
            }
        }
    }

    /// A status that carries an assignee needs one that resolves
    pub fn validate_assignee(
        &self,
        status: JobStatus,
        assignee: Option<Id>,
        errors: &mut ValidationErrors,
    ) {
        match assignee {
            Some(worker_id) if !(self.worker_exists)(worker_id) => {
                errors.add("assignedTo", "must reference an existing worker");
            }
            None if status.requires_assignee() => {
                errors.add("assignedTo", format!("can't be blank when {}", status));
            }
            _ => {}
        }
    }
}
