//! Response shapes with relations resolved
//!
//! Records reference each other by id. The UI wants the related records
//! inline (`worker.user`, `job.worker.user`, `job.creator`,
//! `activity.user`), so representers look them up at read time. A dangling
//! reference renders as `null`.

pub mod activity;
pub mod job;
pub mod worker;

pub use activity::ActivityRepresentation;
pub use job::JobRepresentation;
pub use worker::WorkerRepresentation;
