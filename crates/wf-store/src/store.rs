//! The store and its lock

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use wf_core::traits::Id;
use wf_core::WfResult;
use wf_models::{Activity, Job, JobReport, TimeTracking, User, Worker};

use crate::seed::{seed_demo_data, DemoCredentials};
use crate::table::Table;

/// All entity tables plus the id generator.
///
/// Ids come from one counter shared by every entity kind, so an id is
/// unique across the whole store.
#[derive(Debug)]
pub struct Tables {
    next_id: Id,
    pub(crate) users: Table<User>,
    pub(crate) workers: Table<Worker>,
    pub(crate) jobs: Table<Job>,
    pub(crate) job_reports: Table<JobReport>,
    pub(crate) activities: Table<Activity>,
    pub(crate) time_tracking: Table<TimeTracking>,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            next_id: 1,
            users: Table::new(),
            workers: Table::new(),
            jobs: Table::new(),
            job_reports: Table::new(),
            activities: Table::new(),
            time_tracking: Table::new(),
        }
    }
}

impl Tables {
    pub(crate) fn next_id(&mut self) -> Id {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Process-local entity store shared through application state
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the demo dataset
    pub fn seeded<H>(now: DateTime<Utc>, hash: H) -> WfResult<Self>
    where
        H: Fn(&str) -> WfResult<String>,
    {
        let credentials = DemoCredentials::hash(hash)?;
        let store = Self::new();
        store.write(|tables| seed_demo_data(tables, now, &credentials));
        Ok(store)
    }

    /// Run `f` under the shared lock
    pub fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Run `f` under the exclusive lock. Nothing inside may await.
    pub fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }
}
