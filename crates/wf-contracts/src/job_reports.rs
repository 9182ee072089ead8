//! Create contract for job reports

use wf_core::error::ValidationErrors;
use wf_models::NewJobReport;

use crate::base::{validate_fields, validate_present, Contract, ValidationResult};

/// Contract for a worker submitting a report. Whether `jobId` names a
/// stored job is a lookup, checked by the caller before this runs.
#[derive(Debug, Default)]
pub struct CreateJobReportContract;

impl Contract<NewJobReport> for CreateJobReportContract {
    fn validate(&self, entity: &NewJobReport) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        validate_fields(entity, &mut errors);
        validate_present("description", &entity.description, &mut errors);
        if entity.photos.iter().any(|p| p.trim().is_empty()) {
            errors.add("photos", "can't contain blank entries");
        }

        errors.into_result()
    }
}
