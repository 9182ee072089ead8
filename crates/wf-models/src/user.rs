//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use wf_core::traits::{Entity, Id, Identifiable};

use crate::role::Role;

/// User account
///
/// The credential is kept as an argon2 PHC string and is never serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,

    /// Login name. Case-sensitive.
    pub username: String,

    #[serde(skip_serializing)]
    pub password_hash: String,

    pub role: Role,

    /// Display name used in activity descriptions
    pub name: String,

    pub email: Option<String>,
    pub phone: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Identifiable for User {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for User {
    const TYPE_NAME: &'static str = "User";
}

/// Payload for creating a user (admin only)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 1, max = 255, message = "can't be blank"))]
    pub username: String,

    #[validate(length(min = 1, message = "can't be blank"))]
    pub password: String,

    pub role: Role,

    #[validate(length(min = 1, max = 255, message = "can't be blank"))]
    pub name: String,

    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = User {
            id: 1,
            username: "admin".into(),
            password_hash: "$argon2id$secret".into(),
            role: Role::Admin,
            name: "Admin User".into(),
            email: None,
            phone: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "admin");
        assert_eq!(json["role"], "admin");
        assert!(json["email"].is_null());
    }

    #[test]
    fn test_new_user_validation() {
        let ok: NewUser = serde_json::from_str(
            r#"{"username":"kim","password":"pw","role":"hr","name":"Kim","email":"kim@example.com"}"#,
        )
        .unwrap();
        assert!(ok.validate().is_ok());

        let bad: NewUser = serde_json::from_str(
            r#"{"username":"","password":"pw","role":"hr","name":"Kim","email":"not-an-email"}"#,
        )
        .unwrap();
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_unknown_role_is_rejected_by_serde() {
        let parsed = serde_json::from_str::<NewUser>(
            r#"{"username":"x","password":"pw","role":"owner","name":"X"}"#,
        );
        assert!(parsed.is_err());
    }
}
