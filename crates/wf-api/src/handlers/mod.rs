//! API handlers

pub mod activities;
pub mod auth;
pub mod dashboard;
pub mod job_reports;
pub mod jobs;
pub mod time_tracking;
pub mod users;
pub mod workers;
