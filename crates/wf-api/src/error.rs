//! API error handling
//!
//! Every failure leaves the API as `{"message": "..."}`. Validation failures
//! carry the endpoint's generic message plus the field detail under
//! `errors`.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use wf_core::{ValidationErrors, WfError, WfResult};

/// API error types
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation {
        message: &'static str,
        errors: Vec<String>,
    },
    Unauthorized(String),
    Forbidden(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn not_found(entity: &str) -> Self {
        ApiError::NotFound(format!("{} not found", entity))
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ApiError::Unauthorized(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::Internal(msg.into())
    }

    pub fn invalid(message: &'static str, errors: &ValidationErrors) -> Self {
        ApiError::Validation {
            message,
            errors: errors.full_messages(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<WfError> for ApiError {
    fn from(err: WfError) -> Self {
        match err {
            WfError::NotFound { entity, .. } => ApiError::not_found(entity),
            WfError::Unauthorized { message } => ApiError::Unauthorized(message),
            WfError::Forbidden { message } => ApiError::Forbidden(message),
            WfError::Validation(errors) => ApiError::invalid("Invalid request data", &errors),
            WfError::InvalidTransition { .. } => ApiError::BadRequest(err.to_string()),
            WfError::Invariant { message } => ApiError::BadRequest(message),
            WfError::Conflict { message } => ApiError::Conflict(message),
            WfError::Internal(message) => ApiError::Internal(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::Validation { message, errors } => ErrorBody {
                message: message.to_string(),
                errors,
            },
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                ErrorBody {
                    message: "Internal server error".to_string(),
                    errors: Vec::new(),
                }
            }
            ApiError::NotFound(message)
            | ApiError::Unauthorized(message)
            | ApiError::Forbidden(message)
            | ApiError::BadRequest(message)
            | ApiError::Conflict(message) => ErrorBody {
                message,
                errors: Vec::new(),
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Map domain results at an endpoint boundary
pub trait ResultExt<T> {
    /// Report validation failures under `message`, the endpoint's generic
    /// wording ("Invalid job data", ...)
    fn invalid_as(self, message: &'static str) -> ApiResult<T>;
}

impl<T> ResultExt<T> for WfResult<T> {
    fn invalid_as(self, message: &'static str) -> ApiResult<T> {
        self.map_err(|err| match err {
            WfError::Validation(errors) => ApiError::invalid(message, &errors),
            other => other.into(),
        })
    }
}

/// Unwrap a JSON body, turning a malformed one into the endpoint's 400
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>, message: &'static str) -> ApiResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "rejected request body");
            Err(ApiError::Validation {
                message,
                errors: Vec::new(),
            })
        }
    }
}

/// Unwrap a query string, turning a malformed one into a 400
pub fn query_params<T>(
    query: Result<axum::extract::Query<T>, QueryRejection>,
) -> ApiResult<T> {
    query.map(|axum::extract::Query(value)| value).map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "rejected query string");
        ApiError::bad_request("Invalid request data")
    })
}
