//! Core traits shared by models and the store

/// Primary key type. Process-local, monotonically increasing.
pub type Id = i64;

/// Trait for entities that have a primary key
pub trait Identifiable {
    fn id(&self) -> Id;
}

/// Base trait for all stored domain entities
pub trait Entity: Identifiable + Clone + Send + Sync {
    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;
}
