//! # wf-models
//!
//! Domain models for Workforce Dispatch.
//!
//! Every stored entity carries a store-assigned [`Id`] and implements the
//! [`Entity`] trait from `wf-core`. Relations are plain ids; callers resolve
//! them against the store at read time.

pub use wf_core::traits::{Entity, Id, Identifiable};

pub mod activity;
pub mod job;
pub mod job_report;
pub mod location;
pub mod patch;
pub mod role;
pub mod time_tracking;
pub mod trade;
pub mod user;
pub mod worker;

pub use activity::{Activity, ActivitySubject, ActivityType, NewActivity};
pub use job::{Job, JobPatch, JobPriority, JobStatus, NewJob};
pub use job_report::{JobReport, NewJobReport, ReportStatus};
pub use location::{GeoPoint, JobLocation};
pub use role::Role;
pub use time_tracking::TimeTracking;
pub use trade::Trade;
pub use user::{NewUser, User};
pub use worker::{NewWorker, Worker, WorkerPatch, WorkerStatus};
