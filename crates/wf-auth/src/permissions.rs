//! Role gate
//!
//! Access control is a static check of the session's role against the set
//! of roles an operation accepts. There are no per-record permissions.

use serde::Serialize;
use wf_core::traits::Id;
use wf_models::{Role, User};

use crate::authenticator::AuthError;

/// The user a session belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentUser {
    pub id: Id,
    pub username: String,
    pub role: Role,
    pub name: String,
}

impl CurrentUser {
    pub fn new(id: Id, username: impl Into<String>, role: Role, name: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            role,
            name: name.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn has_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }

    /// Forbidden unless the user's role is one of `roles`
    pub fn require_role(&self, roles: &[Role]) -> Result<(), AuthError> {
        if self.has_role(roles) {
            Ok(())
        } else {
            tracing::warn!(
                user_id = self.id,
                role = %self.role,
                "role not permitted for operation"
            );
            Err(AuthError::InsufficientPermissions)
        }
    }
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.username.clone(), user.role, user.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_role() {
        let hr = CurrentUser::new(2, "hr.manager", Role::Hr, "HR Manager");

        assert!(hr.require_role(&[Role::Admin, Role::Hr]).is_ok());
        assert!(matches!(
            hr.require_role(&[Role::Worker]),
            Err(AuthError::InsufficientPermissions)
        ));
        assert!(!hr.is_admin());
    }

    #[test]
    fn test_serializes_public_fields_only() {
        let user = CurrentUser::new(1, "admin", Role::Admin, "Admin User");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "username": "admin", "role": "admin", "name": "Admin User"})
        );
    }
}
