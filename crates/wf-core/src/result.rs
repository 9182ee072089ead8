//! Result type aliases

use crate::error::WfError;
use crate::traits::Id;

/// Standard Result type for domain operations
pub type WfResult<T> = Result<T, WfError>;

/// Turns the store's absent-value signal into a typed not-found error.
pub trait OptionExt<T> {
    fn or_not_found(self, entity: &'static str, id: Id) -> WfResult<T>;
    fn or_missing(self, entity: &'static str) -> WfResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_not_found(self, entity: &'static str, id: Id) -> WfResult<T> {
        self.ok_or_else(|| WfError::not_found(entity, id))
    }

    fn or_missing(self, entity: &'static str) -> WfResult<T> {
        self.ok_or_else(|| WfError::missing(entity))
    }
}
