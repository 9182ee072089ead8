//! Worker profile contracts

use wf_core::error::ValidationErrors;
use wf_models::{NewWorker, User, Worker, WorkerPatch};

use crate::base::{validate_fields, Contract, ValidationResult};

/// Contract for creating a worker profile.
///
/// `user` is the account named by `userId` (if it exists) and
/// `existing_profile` the worker already attached to it (if any).
pub struct CreateWorkerContract<'a> {
    user: Option<&'a User>,
    existing_profile: Option<&'a Worker>,
}

impl<'a> CreateWorkerContract<'a> {
    pub fn new(user: Option<&'a User>, existing_profile: Option<&'a Worker>) -> Self {
        Self {
            user,
            existing_profile,
        }
    }

    fn validate_user(&self, errors: &mut ValidationErrors) {
        if self.user.is_none() {
            errors.add("userId", "does not exist");
        } else if self.existing_profile.is_some() {
            errors.add("userId", "already has a worker profile");
        }
    }
}

impl Contract<NewWorker> for CreateWorkerContract<'_> {
    fn validate(&self, entity: &NewWorker) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        validate_fields(entity, &mut errors);
        self.validate_user(&mut errors);

        errors.into_result()
    }
}

/// Contract for patching a worker profile
#[derive(Debug, Default)]
pub struct UpdateWorkerContract;

impl Contract<WorkerPatch> for UpdateWorkerContract {
    fn validate(&self, entity: &WorkerPatch) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        validate_fields(entity, &mut errors);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wf_models::{Role, Trade, WorkerStatus};

    fn user() -> User {
        User {
            id: 3,
            username: "john.doe".into(),
            password_hash: String::new(),
            role: Role::Worker,
            name: "John Doe".into(),
            email: None,
            phone: None,
            created_at: Utc::now(),
        }
    }

    fn new_worker() -> NewWorker {
        serde_json::from_str(r#"{"userId":3,"specialty":"plumbing"}"#).unwrap()
    }

    #[test]
    fn test_user_must_exist() {
        let errors = CreateWorkerContract::new(None, None)
            .validate(&new_worker())
            .unwrap_err();
        assert_eq!(errors.full_messages(), vec!["userId does not exist"]);
    }

    #[test]
    fn test_one_profile_per_user() {
        let owner = user();
        let existing = Worker {
            id: 9,
            user_id: 3,
            specialty: Trade::Plumbing,
            status: WorkerStatus::Available,
            location: None,
            completed_jobs: 0,
            rating: "0.00".into(),
            is_active: true,
        };

        assert!(CreateWorkerContract::new(Some(&owner), None)
            .validate(&new_worker())
            .is_ok());
        assert!(CreateWorkerContract::new(Some(&owner), Some(&existing))
            .validate(&new_worker())
            .is_err());
    }

    #[test]
    fn test_patch_location_out_of_range() {
        let patch: WorkerPatch =
            serde_json::from_str(r#"{"location":{"lat":95.0,"lng":0.0}}"#).unwrap();
        let errors = UpdateWorkerContract.validate(&patch).unwrap_err();
        assert!(errors.has_error("location.lat"));
    }
}
