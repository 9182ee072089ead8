//! # wf-contracts
//!
//! Contract validation for Workforce Dispatch.
//!
//! Contracts check inbound create/update payloads before they reach the
//! store. Lookups a contract needs (does this worker exist, does this user
//! already have a profile) are handed in by the caller, so contracts stay
//! independent of the store.

pub mod base;
pub mod job_reports;
pub mod jobs;
pub mod users;
pub mod workers;

pub use base::*;
