//! Login

use serde::Deserialize;
use validator::Validate;
use wf_auth::{Authenticator, Session};
use wf_core::{WfError, WfResult};
use wf_models::Role;
use wf_store::MemoryStore;

use crate::base::Callable;

/// Login form. The role the user picks must be the role on the account.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginParams {
    #[validate(length(min = 1, message = "can't be blank"))]
    pub username: String,

    #[validate(length(min = 1, message = "can't be blank"))]
    pub password: String,

    pub role: Role,
}

/// Service for exchanging credentials for a session
pub struct LoginService<'a> {
    store: &'a MemoryStore,
    authenticator: &'a Authenticator,
}

impl<'a> LoginService<'a> {
    pub fn new(store: &'a MemoryStore, authenticator: &'a Authenticator) -> Self {
        Self {
            store,
            authenticator,
        }
    }
}

impl Callable<LoginParams> for LoginService<'_> {
    type Output = Session;

    fn call(self, params: LoginParams) -> WfResult<Session> {
        params.validate().map_err(|e| WfError::Validation(e.into()))?;

        // argon2 verification is slow; run it after the lock is released
        let user = self
            .store
            .read(|tables| tables.user_by_username(&params.username).cloned());
        let current = self
            .authenticator
            .check_credentials(user.as_ref(), &params.password, params.role)?;

        Ok(self.authenticator.start_session(current))
    }
}
