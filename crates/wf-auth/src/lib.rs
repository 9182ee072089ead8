//! # wf-auth
//!
//! Authentication and authorization for Workforce Dispatch.
//!
//! ## Features
//!
//! - Argon2id password hashing
//! - Cookie sessions held in an in-memory session store
//! - Static role gate (`admin`, `hr`, `worker`)

pub mod authenticator;
pub mod password;
pub mod permissions;
pub mod session;

pub use authenticator::{AuthError, AuthResult, Authenticator};
pub use password::PasswordService;
pub use permissions::CurrentUser;
pub use session::{CookieConfig, MemorySessionStore, SameSite, Session, SessionStore};
