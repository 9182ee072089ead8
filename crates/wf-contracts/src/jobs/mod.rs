//! Job contracts
//!
//! - `transitions`: the status allow-list
//! - `create`: new-job payloads
//! - `update`: PATCH payloads, including assignment consistency

mod base;
mod create;
mod transitions;
mod update;

pub use base::JobBaseContract;
pub use create::CreateJobContract;
pub use transitions::{check_transition, transition_allowed, ALLOWED_TRANSITIONS};
pub use update::UpdateJobContract;
