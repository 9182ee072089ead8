//! Router-level test harness

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use wf_auth::{Authenticator, CookieConfig, MemorySessionStore, PasswordService};
use wf_store::MemoryStore;

use crate::extractors::AppState;
use crate::routes::router;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    /// Seeded store, cheap password hashing
    pub fn new() -> Self {
        let passwords = PasswordService::new(8, 1).unwrap();
        let hasher = passwords.clone();
        let store = MemoryStore::seeded(Utc::now(), move |plain| {
            hasher.hash(plain).map_err(Into::into)
        })
        .unwrap();
        let authenticator = Authenticator::new(
            Arc::new(MemorySessionStore::new()),
            passwords,
            CookieConfig::default(),
            Duration::hours(1),
        );
        let state = AppState::new(store, authenticator);
        let router = router().with_state(state.clone());
        Self { state, router }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.request("GET", uri, cookie, None).await
    }

    /// Log in and return the `Cookie` header value for the new session
    pub async fn login(&self, username: &str, password: &str, role: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                None,
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                    "role": role,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login as {username} failed");
        let set_cookie = response.headers[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    /// Worker profile id of a seeded worker account
    pub fn worker_id(&self, username: &str) -> i64 {
        self.state.store.read(|t| {
            let user = t.user_by_username(username).unwrap();
            t.worker_by_user_id(user.id).unwrap().id
        })
    }
}
