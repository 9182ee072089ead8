//! Worker profile services

use wf_contracts::workers::{CreateWorkerContract, UpdateWorkerContract};
use wf_contracts::Contract;
use wf_core::{Id, OptionExt, WfError, WfResult};
use wf_models::{NewWorker, Role, Worker, WorkerPatch};

use crate::base::{own_worker, Callable, ServiceContext};

/// Service for creating a worker profile (admin only)
pub struct CreateWorkerService<'a> {
    ctx: ServiceContext<'a>,
}

impl<'a> CreateWorkerService<'a> {
    pub fn new(ctx: ServiceContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Callable<NewWorker> for CreateWorkerService<'_> {
    type Output = Worker;

    fn call(self, params: NewWorker) -> WfResult<Worker> {
        self.ctx.require_role(&[Role::Admin])?;

        let worker = self.ctx.store.write(|tables| {
            CreateWorkerContract::new(
                tables.user(params.user_id),
                tables.worker_by_user_id(params.user_id),
            )
            .validate(&params)
            .map_err(WfError::Validation)?;
            Ok::<_, WfError>(tables.create_worker(params))
        })?;

        tracing::info!(
            worker_id = worker.id,
            user_id = worker.user_id,
            specialty = %worker.specialty,
            "worker profile created"
        );
        Ok(worker)
    }
}

/// Service for patching a worker profile
pub struct UpdateWorkerService<'a> {
    ctx: ServiceContext<'a>,
    worker_id: Id,
}

impl<'a> UpdateWorkerService<'a> {
    pub fn new(ctx: ServiceContext<'a>, worker_id: Id) -> Self {
        Self { ctx, worker_id }
    }
}

impl Callable<WorkerPatch> for UpdateWorkerService<'_> {
    type Output = Worker;

    fn call(self, params: WorkerPatch) -> WfResult<Worker> {
        UpdateWorkerContract
            .validate(&params)
            .map_err(WfError::Validation)?;

        let worker = self
            .ctx
            .store
            .write(|tables| tables.update_worker(self.worker_id, params))
            .or_not_found("Worker", self.worker_id)?;

        tracing::info!(
            worker_id = worker.id,
            status = %worker.status,
            updated_by = self.ctx.user.id,
            "worker profile updated"
        );
        Ok(worker)
    }
}

pub fn list_workers(ctx: ServiceContext<'_>) -> Vec<Worker> {
    ctx.store.read(|tables| tables.workers())
}

/// The acting worker's own profile
pub fn my_worker(ctx: ServiceContext<'_>) -> WfResult<Worker> {
    ctx.require_role(&[Role::Worker])?;
    ctx.store.read(|tables| own_worker(tables, ctx.user.id))
}
