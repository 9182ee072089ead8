//! Create contract for users

use wf_core::error::ValidationErrors;
use wf_models::NewUser;

use crate::base::{validate_fields, validate_present, Contract, ValidationResult};

/// Contract for creating a new user account.
///
/// Username uniqueness is not a validation rule here; the user service
/// reports it as a conflict.
#[derive(Debug, Default)]
pub struct CreateUserContract;

impl CreateUserContract {
    pub fn new() -> Self {
        Self
    }

    fn validate_username(&self, username: &str, errors: &mut ValidationErrors) {
        validate_present("username", username, errors);
        if username.chars().any(char::is_whitespace) && !errors.has_error("username") {
            errors.add("username", "can't contain whitespace");
        }
    }
}

impl Contract<NewUser> for CreateUserContract {
    fn validate(&self, entity: &NewUser) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        validate_fields(entity, &mut errors);
        self.validate_username(&entity.username, &mut errors);
        validate_present("name", &entity.name, &mut errors);

        errors.into_result()
    }
}
