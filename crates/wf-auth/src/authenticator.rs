//! Login, session lookup and logout

use chrono::Duration;
use std::sync::Arc;
use thiserror::Error;
use wf_core::config::AuthConfig;
use wf_core::WfError;
use wf_models::{Role, User};

use crate::password::PasswordService;
use crate::permissions::CurrentUser;
use crate::session::{extract_session_id, CookieConfig, Session, SessionStore};

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Unauthorized")]
    Required,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Forbidden")]
    InsufficientPermissions,
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

impl From<AuthError> for WfError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Required | AuthError::InvalidCredentials => {
                WfError::unauthorized(err.to_string())
            }
            AuthError::InsufficientPermissions => WfError::forbidden(err.to_string()),
            AuthError::Hashing(message) => WfError::Internal(message),
        }
    }
}

/// Authenticator for validating credentials and session cookies
#[derive(Clone)]
pub struct Authenticator {
    sessions: Arc<dyn SessionStore>,
    passwords: PasswordService,
    cookie: CookieConfig,
    lifetime: Duration,
}

impl Authenticator {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        passwords: PasswordService,
        cookie: CookieConfig,
        lifetime: Duration,
    ) -> Self {
        Self {
            sessions,
            passwords,
            cookie,
            lifetime,
        }
    }

    /// Build from the `auth` section of the application config
    pub fn from_config(config: &AuthConfig, sessions: Arc<dyn SessionStore>) -> AuthResult<Self> {
        let passwords =
            PasswordService::new(config.password_memory_kib, config.password_iterations)?;
        let cookie = CookieConfig {
            name: config.cookie_name.clone(),
            secure: config.cookie_secure,
            max_age: Some(config.session_lifetime_seconds),
            ..CookieConfig::default()
        };
        Ok(Self::new(
            sessions,
            passwords,
            cookie,
            Duration::seconds(config.session_lifetime_seconds),
        ))
    }

    pub fn passwords(&self) -> &PasswordService {
        &self.passwords
    }

    pub fn cookie(&self) -> &CookieConfig {
        &self.cookie
    }

    /// Username, password and role must all match
    pub fn check_credentials(
        &self,
        user: Option<&User>,
        password: &str,
        role: Role,
    ) -> AuthResult<CurrentUser> {
        let Some(user) = user else {
            return Err(AuthError::InvalidCredentials);
        };
        if user.role != role || !self.passwords.verify(password, &user.password_hash) {
            tracing::warn!(username = %user.username, requested_role = %role, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        Ok(CurrentUser::from(user))
    }

    /// Store a fresh session for `user`
    pub fn start_session(&self, user: CurrentUser) -> Session {
        let session = Session::new(user, self.lifetime);
        tracing::info!(user_id = session.user.id, role = %session.user.role, "session started");
        self.sessions.set(session.clone());
        session
    }

    /// Resolve the session named by a `Cookie` header
    pub fn authenticate(&self, cookie_header: Option<&str>) -> AuthResult<CurrentUser> {
        let session_id = cookie_header
            .and_then(|header| extract_session_id(header, &self.cookie.name))
            .ok_or(AuthError::Required)?;
        self.sessions
            .get(&session_id)
            .map(|session| session.user)
            .ok_or(AuthError::Required)
    }

    /// Forget the session named by a `Cookie` header, if any
    pub fn end_session(&self, cookie_header: Option<&str>) {
        if let Some(session_id) =
            cookie_header.and_then(|header| extract_session_id(header, &self.cookie.name))
        {
            self.sessions.delete(&session_id);
        }
    }
}
