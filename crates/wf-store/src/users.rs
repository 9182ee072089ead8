//! User table operations

use chrono::{DateTime, Utc};
use wf_core::traits::Id;
use wf_models::{Role, User};

use crate::store::Tables;

/// Row data for a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Tables {
    /// Insert a user. Does not check username uniqueness.
    pub fn create_user(&mut self, dto: CreateUserDto, now: DateTime<Utc>) -> User {
        let user = User {
            id: self.next_id(),
            username: dto.username,
            password_hash: dto.password_hash,
            role: dto.role,
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            created_at: now,
        };
        tracing::debug!(user_id = user.id, username = %user.username, "user stored");
        self.users.insert(user)
    }

    pub fn user(&self, id: Id) -> Option<&User> {
        self.users.get(id)
    }

    /// Exact, case-sensitive match
    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.find(|u| u.username == username)
    }

    pub fn users(&self) -> Vec<User> {
        self.users.all()
    }

    pub fn users_with_role(&self, role: Role) -> Vec<User> {
        self.users.filter(|u| u.role == role)
    }
}
