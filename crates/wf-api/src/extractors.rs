//! Axum extractors for API handlers

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
};
use std::sync::Arc;
use wf_auth::{Authenticator, CurrentUser};
use wf_services::ServiceContext;
use wf_store::MemoryStore;

use crate::error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub authenticator: Authenticator,
}

impl AppState {
    pub fn new(store: MemoryStore, authenticator: Authenticator) -> Self {
        Self {
            store: Arc::new(store),
            authenticator,
        }
    }

    /// Service context for a request made by `user`
    pub fn context<'a>(&'a self, user: &'a CurrentUser) -> ServiceContext<'a> {
        ServiceContext::new(&self.store, user)
    }
}

/// Raw `Cookie` header, if the request sent one
pub fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::COOKIE).and_then(|v| v.to_str().ok())
}

/// The user behind the request's session cookie. Rejects with 401.
pub struct AuthenticatedUser(pub CurrentUser);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        app_state
            .authenticator
            .authenticate(cookie_header(&parts.headers))
            .map(AuthenticatedUser)
            .map_err(|_| ApiError::unauthorized("Unauthorized"))
    }
}

impl std::ops::Deref for AuthenticatedUser {
    type Target = CurrentUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
