//! Account services

use wf_auth::PasswordService;
use wf_contracts::users::CreateUserContract;
use wf_contracts::Contract;
use wf_core::{WfError, WfResult};
use wf_models::{NewUser, Role, User};
use wf_store::CreateUserDto;

use crate::base::{Callable, ServiceContext};

/// Service for creating accounts (admin only)
///
/// The password is hashed before the store lock is taken; the username
/// uniqueness check and the insert happen under one write.
pub struct CreateUserService<'a> {
    ctx: ServiceContext<'a>,
    passwords: &'a PasswordService,
}

impl<'a> CreateUserService<'a> {
    pub fn new(ctx: ServiceContext<'a>, passwords: &'a PasswordService) -> Self {
        Self { ctx, passwords }
    }
}

impl Callable<NewUser> for CreateUserService<'_> {
    type Output = User;

    fn call(self, params: NewUser) -> WfResult<User> {
        self.ctx.require_role(&[Role::Admin])?;
        CreateUserContract::new()
            .validate(&params)
            .map_err(WfError::Validation)?;

        let password_hash = self.passwords.hash(&params.password)?;
        let now = self.ctx.now;

        let user = self.ctx.store.write(|tables| {
            if tables.user_by_username(&params.username).is_some() {
                return Err(WfError::conflict("Username already exists"));
            }
            Ok(tables.create_user(
                CreateUserDto {
                    username: params.username,
                    password_hash,
                    role: params.role,
                    name: params.name,
                    email: params.email,
                    phone: params.phone,
                },
                now,
            ))
        })?;

        tracing::info!(
            user_id = user.id,
            role = %user.role,
            created_by = self.ctx.user.id,
            "user created"
        );
        Ok(user)
    }
}

/// Every account (admin only)
pub fn list_users(ctx: ServiceContext<'_>) -> WfResult<Vec<User>> {
    ctx.require_role(&[Role::Admin])?;
    Ok(ctx.store.read(|tables| tables.users()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::testing::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "secret1".to_string(),
            role: Role::Hr,
            name: "Dana Reyes".to_string(),
            email: Some("dana@company.com".to_string()),
            phone: None,
        }
    }

    #[test]
    fn test_admin_creates_user_with_hashed_password() {
        let store = seeded_store();
        let admin = acting(&store, "admin");
        let passwords = passwords();

        let user = CreateUserService::new(ServiceContext::new(&store, &admin), &passwords)
            .call(new_user("dana"))
            .unwrap();

        assert_eq!(user.role, Role::Hr);
        assert!(passwords.verify("secret1", &user.password_hash));
        assert_eq!(
            store.read(|t| t.user_by_username("dana").map(|u| u.id)),
            Some(user.id)
        );
    }

    #[test]
    fn test_duplicate_username_conflicts() {
        let store = seeded_store();
        let admin = acting(&store, "admin");
        let passwords = passwords();

        let err = CreateUserService::new(ServiceContext::new(&store, &admin), &passwords)
            .call(new_user("john.doe"))
            .unwrap_err();
        assert_eq!(err.status_code(), 409);
        assert_eq!(store.read(|t| t.users().len()), 5);
    }

    #[test]
    fn test_only_admin_may_create_or_list() {
        let store = seeded_store();
        let hr = acting(&store, "hr.manager");
        let passwords = passwords();
        let ctx = ServiceContext::new(&store, &hr);

        let err = CreateUserService::new(ctx, &passwords)
            .call(new_user("dana"))
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
        assert_eq!(list_users(ctx).unwrap_err().status_code(), 403);
    }

    #[test]
    fn test_invalid_payload() {
        let store = seeded_store();
        let admin = acting(&store, "admin");
        let passwords = passwords();

        let mut params = new_user("  ");
        params.email = Some("not-an-email".into());
        let err = CreateUserService::new(ServiceContext::new(&store, &admin), &passwords)
            .call(params)
            .unwrap_err();
        match err {
            WfError::Validation(errors) => {
                assert!(errors.has_error("username"));
                assert!(errors.has_error("email"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
