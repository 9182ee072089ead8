//! Worker table operations

use wf_core::traits::Id;
use wf_models::{NewWorker, Worker, WorkerPatch, WorkerStatus};

use crate::store::Tables;

impl Tables {
    pub fn create_worker(&mut self, new: NewWorker) -> Worker {
        let worker = Worker {
            id: self.next_id(),
            user_id: new.user_id,
            specialty: new.specialty,
            status: new.status,
            location: new.location,
            completed_jobs: new.completed_jobs,
            rating: new.rating,
            is_active: new.is_active,
        };
        tracing::debug!(worker_id = worker.id, user_id = worker.user_id, "worker stored");
        self.workers.insert(worker)
    }

    pub fn worker(&self, id: Id) -> Option<&Worker> {
        self.workers.get(id)
    }

    pub fn worker_by_user_id(&self, user_id: Id) -> Option<&Worker> {
        self.workers.find(|w| w.user_id == user_id)
    }

    pub fn workers(&self) -> Vec<Worker> {
        self.workers.all()
    }

    /// Merge `patch` over the stored worker
    pub fn update_worker(&mut self, id: Id, patch: WorkerPatch) -> Option<Worker> {
        self.workers.update(id, |worker| patch.apply(worker))
    }

    pub fn set_worker_status(&mut self, id: Id, status: WorkerStatus) -> Option<Worker> {
        self.workers.update(id, |worker| worker.status = status)
    }
}
