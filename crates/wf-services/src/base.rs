//! Base service plumbing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use wf_auth::CurrentUser;
use wf_core::{OptionExt, WfResult};
use wf_models::{Role, Worker};
use wf_store::{MemoryStore, Tables};

/// Base trait for all callable services
pub trait Callable<Params> {
    type Output;

    /// Execute the service
    fn call(self, params: Params) -> WfResult<Self::Output>;
}

/// Who is acting, against which store, and at what instant.
///
/// The clock is captured once so that every row a service writes in one
/// call carries the same timestamp.
#[derive(Clone, Copy)]
pub struct ServiceContext<'a> {
    pub store: &'a MemoryStore,
    pub user: &'a CurrentUser,
    pub now: DateTime<Utc>,
}

impl<'a> ServiceContext<'a> {
    pub fn new(store: &'a MemoryStore, user: &'a CurrentUser) -> Self {
        Self::at(store, user, Utc::now())
    }

    pub fn at(store: &'a MemoryStore, user: &'a CurrentUser, now: DateTime<Utc>) -> Self {
        Self { store, user, now }
    }

    /// Forbidden unless the acting user has one of `roles`
    pub fn require_role(&self, roles: &[Role]) -> WfResult<()> {
        self.user.require_role(roles).map_err(Into::into)
    }
}

/// The worker profile belonging to `user_id`
pub(crate) fn own_worker(tables: &Tables, user_id: wf_core::Id) -> WfResult<Worker> {
    tables
        .worker_by_user_id(user_id)
        .cloned()
        .or_missing("Worker profile")
}

/// Display name of the user behind a worker profile
pub(crate) fn worker_name(tables: &Tables, worker_id: wf_core::Id) -> String {
    tables
        .worker(worker_id)
        .and_then(|worker| tables.user(worker.user_id))
        .map(|user| user.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Query-string field where an empty value counts as absent (`?status=`)
pub(crate) fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
