//! # wf-store
//!
//! In-memory entity store for Workforce Dispatch.
//!
//! All six tables live behind a single [`parking_lot::RwLock`] owned by
//! [`MemoryStore`]. Reads share the lock; a domain operation that needs to
//! check-then-write runs inside one [`MemoryStore::write`] closure so its
//! invariants hold under a multi-threaded runtime.
//!
//! ## Example
//!
//! ```ignore
//! use wf_store::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let admins = store.read(|t| t.users().len());
//! ```
//!
//! Lookups never fail; the only "error" is an absent value.

pub mod activities;
pub mod job_reports;
pub mod jobs;
pub mod seed;
pub mod store;
pub mod table;
pub mod time_tracking;
pub mod users;
pub mod workers;

pub use seed::{seed_demo_data, DemoCredentials};
pub use store::{MemoryStore, Tables};
pub use table::Table;
pub use users::CreateUserDto;
