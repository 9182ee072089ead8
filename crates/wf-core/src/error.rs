//! Core error types for Workforce Dispatch
//!
//! Domain crates never panic on missing data; they return one of these
//! variants and the HTTP boundary translates it into a status + message.

use std::collections::HashMap;
use thiserror::Error;

use crate::traits::Id;

/// Core error type for all domain operations
#[derive(Error, Debug)]
pub enum WfError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: Option<Id> },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// A state-machine invariant would be broken (double clock-in, etc.)
    #[error("{message}")]
    Invariant { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WfError {
    pub fn not_found(entity: &'static str, id: Id) -> Self {
        WfError::NotFound { entity, id: Some(id) }
    }

    /// Not-found without a concrete id (e.g. "the caller's worker profile")
    pub fn missing(entity: &'static str) -> Self {
        WfError::NotFound { entity, id: None }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        WfError::Invariant { message: message.into() }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        WfError::Conflict { message: message.into() }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        WfError::Forbidden { message: message.into() }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        WfError::Unauthorized { message: message.into() }
    }

    /// Single-field validation failure
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        WfError::Validation(errors)
    }
}

/// Validation errors collection
#[derive(Error, Debug, Default, Clone)]
#[error("Validation errors: {errors:?}")]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> Vec<error_messages>
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        let mut fields: Vec<_> = self.errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));
        for (field, field_messages) in fields {
            for msg in field_messages {
                messages.push(format!("{} {}", field, msg));
            }
        }
        messages
    }

    /// Ok when empty, otherwise the collected errors
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(source: validator::ValidationErrors) -> Self {
        let mut errors = ValidationErrors::new();
        collect_validator_errors(&source, None, &mut errors);
        errors
    }
}

/// Flatten nested struct errors into dotted field names (`location.lat`)
fn collect_validator_errors(
    source: &validator::ValidationErrors,
    prefix: Option<&str>,
    into: &mut ValidationErrors,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in source.errors() {
        let name = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("is invalid ({})", error.code));
                    into.add(name.clone(), message);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validator_errors(nested, Some(&name), into);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item = format!("{}[{}]", name, index);
                    collect_validator_errors(nested, Some(&item), into);
                }
            }
        }
    }
}

impl From<validator::ValidationErrors> for WfError {
    fn from(source: validator::ValidationErrors) -> Self {
        WfError::Validation(source.into())
    }
}

/// HTTP status code mapping for errors
impl WfError {
    pub fn status_code(&self) -> u16 {
        match self {
            WfError::NotFound { .. } => 404,
            WfError::Unauthorized { .. } => 401,
            WfError::Forbidden { .. } => 403,
            WfError::Validation(_) => 400,
            WfError::InvalidTransition { .. } | WfError::Invariant { .. } => 400,
            WfError::Conflict { .. } => 409,
            WfError::Internal(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            WfError::NotFound { .. } => "not_found",
            WfError::Unauthorized { .. } => "unauthorized",
            WfError::Forbidden { .. } => "forbidden",
            WfError::Validation(_) => "validation_failed",
            WfError::InvalidTransition { .. } => "invalid_transition",
            WfError::Invariant { .. } => "invariant_violated",
            WfError::Conflict { .. } => "conflict",
            WfError::Internal(_) => "internal_error",
        }
    }
}
