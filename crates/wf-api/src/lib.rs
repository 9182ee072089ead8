//! # wf-api
//!
//! JSON-over-HTTP interface for Workforce Dispatch.
//!
//! Handlers authenticate the session cookie, call into `wf-services`, and
//! render records with their relations resolved. Errors leave as
//! `{"message": "..."}`.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod representers;
pub mod routes;

#[cfg(test)]
mod test_support;

pub use extractors::AppState;
pub use routes::router;
