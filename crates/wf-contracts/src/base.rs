//! Base contract system

use validator::Validate;
use wf_core::error::ValidationErrors;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Base contract trait
pub trait Contract<T>: Send + Sync {
    /// Validate the entity
    fn validate(&self, entity: &T) -> ValidationResult;
}

/// Run the derive-based field rules of `entity` and fold any failures into `errors`
pub fn validate_fields<T: Validate>(entity: &T, errors: &mut ValidationErrors) {
    if let Err(field_errors) = entity.validate() {
        errors.merge(field_errors.into());
    }
}

/// `length(min = 1)` accepts whitespace; this does not
pub fn validate_present(field: &str, value: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() && !errors.has_error(field) {
        errors.add(field, "can't be blank");
    }
}
