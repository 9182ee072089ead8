//! Clock-in / clock-out
//!
//! A worker has at most one open shift. The open-shift check, the shift
//! row, the worker status flip and the activity entry are written under one
//! store write.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;
use wf_core::{Id, OptionExt, WfError, WfResult};
use wf_models::{
    ActivitySubject, ActivityType, GeoPoint, NewActivity, Role, TimeTracking, WorkerStatus,
};

use crate::base::{own_worker, Callable, ServiceContext};

/// Body of a clock-in request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClockInParams {
    #[serde(default)]
    pub job_id: Option<Id>,

    #[validate]
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

/// Body of a clock-out request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClockOutParams {
    #[validate]
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

fn location_value(location: Option<GeoPoint>) -> Value {
    location
        .and_then(|point| serde_json::to_value(point).ok())
        .unwrap_or(Value::Null)
}

pub struct ClockInService<'a> {
    ctx: ServiceContext<'a>,
}

impl<'a> ClockInService<'a> {
    pub fn new(ctx: ServiceContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Callable<ClockInParams> for ClockInService<'_> {
    type Output = TimeTracking;

    fn call(self, params: ClockInParams) -> WfResult<TimeTracking> {
        self.ctx.require_role(&[Role::Worker])?;
        params.validate().map_err(|e| WfError::Validation(e.into()))?;
        let actor = self.ctx.user;
        let now = self.ctx.now;

        let record = self.ctx.store.write(|tables| {
            let worker = own_worker(tables, actor.id)?;
            if tables.current_time_tracking(worker.id).is_some() {
                tracing::warn!(worker_id = worker.id, "clock-in while already clocked in");
                return Err(WfError::invariant("Already clocked in"));
            }

            let record = tables.open_time_tracking(worker.id, params.job_id, params.location, now);
            tables
                .set_worker_status(worker.id, WorkerStatus::Working)
                .or_not_found("Worker", worker.id)?;
            tables.create_activity(
                NewActivity::new(
                    ActivityType::WorkerClockedIn,
                    actor.id,
                    format!("{} clocked in", actor.name),
                )
                .about(ActivitySubject::Worker(worker.id))
                .with_metadata("location", location_value(params.location)),
                now,
            );
            Ok(record)
        })?;

        tracing::info!(
            worker_id = record.worker_id,
            record_id = record.id,
            job_id = ?record.job_id,
            "worker clocked in"
        );
        Ok(record)
    }
}

pub struct ClockOutService<'a> {
    ctx: ServiceContext<'a>,
}

impl<'a> ClockOutService<'a> {
    pub fn new(ctx: ServiceContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Callable<ClockOutParams> for ClockOutService<'_> {
    type Output = TimeTracking;

    fn call(self, params: ClockOutParams) -> WfResult<TimeTracking> {
        self.ctx.require_role(&[Role::Worker])?;
        params.validate().map_err(|e| WfError::Validation(e.into()))?;
        let actor = self.ctx.user;
        let now = self.ctx.now;

        let record = self.ctx.store.write(|tables| {
            let worker = own_worker(tables, actor.id)?;
            let Some(open) = tables.current_time_tracking(worker.id) else {
                tracing::warn!(worker_id = worker.id, "clock-out without open shift");
                return Err(WfError::invariant("Not clocked in"));
            };

            let record = tables
                .close_time_tracking(open.id, params.location, now)
                .or_not_found("TimeTracking", open.id)?;
            tables
                .set_worker_status(worker.id, WorkerStatus::Available)
                .or_not_found("Worker", worker.id)?;
            tables.create_activity(
                NewActivity::new(
                    ActivityType::WorkerClockedOut,
                    actor.id,
                    format!("{} clocked out", actor.name),
                )
                .about(ActivitySubject::Worker(worker.id))
                .with_metadata("location", location_value(params.location)),
                now,
            );
            Ok(record)
        })?;

        tracing::info!(
            worker_id = record.worker_id,
            record_id = record.id,
            minutes = record.duration().map(|d| d.num_minutes()),
            "worker clocked out"
        );
        Ok(record)
    }
}

/// The acting worker's shifts, newest first, optionally limited to one day
pub fn my_time_tracking(
    ctx: ServiceContext<'_>,
    date: Option<NaiveDate>,
) -> WfResult<Vec<TimeTracking>> {
    ctx.require_role(&[Role::Worker])?;
    ctx.store.read(|tables| {
        let worker = own_worker(tables, ctx.user.id)?;
        Ok(tables.time_tracking_by_worker(worker.id, date))
    })
}

/// The acting worker's open shift, if any
pub fn current_time_tracking(ctx: ServiceContext<'_>) -> WfResult<Option<TimeTracking>> {
    ctx.require_role(&[Role::Worker])?;
    ctx.store.read(|tables| {
        let worker = own_worker(tables, ctx.user.id)?;
        Ok(tables.current_time_tracking(worker.id))
    })
}
