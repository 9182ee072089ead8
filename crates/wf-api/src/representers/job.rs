use serde::Serialize;
use wf_models::{Job, User};
use wf_store::Tables;

use super::worker::WorkerRepresentation;

/// Job with its assigned `worker` (and that worker's `user`) and `creator`
#[derive(Debug, Clone, Serialize)]
pub struct JobRepresentation {
    #[serde(flatten)]
    pub job: Job,
    pub worker: Option<WorkerRepresentation>,
    pub creator: Option<User>,
}

impl JobRepresentation {
    pub fn represent(tables: &Tables, job: Job) -> Self {
        let worker = job
            .assigned_to
            .and_then(|id| tables.worker(id).cloned())
            .map(|worker| WorkerRepresentation::represent(tables, worker));
        let creator = tables.user(job.created_by).cloned();
        Self {
            job,
            worker,
            creator,
        }
    }

    pub fn collection(tables: &Tables, jobs: Vec<Job>) -> Vec<Self> {
        jobs.into_iter()
            .map(|job| Self::represent(tables, job))
            .collect()
    }
}
