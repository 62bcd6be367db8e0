//! Response types and error handling for API endpoints
//!
//! Every error renders as the `{"errors":{"body":[...]}}` envelope the API
//! speaks. Server errors are logged with their full cause chain; the client
//! only ever sees a generic message for those.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use conduit_common::AppError;
use conduit_core::DomainError;
use conduit_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("missing authorization header")]
    MissingAuth,

    #[error("invalid authorization header format")]
    InvalidAuthFormat,

    #[error("internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Domain(e) => {
                if e.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if e.is_authorization() {
                    StatusCode::FORBIDDEN
                } else if e.is_conflict() {
                    StatusCode::CONFLICT
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            Self::Validation(_) | Self::InvalidBody(_) | Self::InvalidPath(_) | Self::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::MissingAuth | Self::InvalidAuthFormat => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create an invalid path-parameter error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an invalid query-parameter error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    /// The messages for the error envelope body
    fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => {
                let mut messages = Vec::new();
                flatten_validation_errors(errors, "", &mut messages);
                if messages.is_empty() {
                    messages.push("validation failed".to_string());
                }
                messages
            }
            // Server errors get a generic client-visible message
            Self::Internal(_) => vec!["internal server error".to_string()],
            other if other.status_code().is_server_error() => {
                vec!["internal server error".to_string()]
            }
            other => vec![other.to_string()],
        }
    }
}

/// Walk the (possibly nested) validation error tree into flat messages
fn flatten_validation_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            format!("{field}")
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    match &err.message {
                        Some(message) => out.push(message.to_string()),
                        None => out.push(format!("{path} is invalid")),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                flatten_validation_errors(nested, &path, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_validation_errors(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

/// The `{"errors":{"body":[...]}}` envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub errors: ErrorMessages,
}

/// Error messages for the envelope body
#[derive(Debug, Serialize)]
pub struct ErrorMessages {
    pub body: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors with their cause; clients get a generic body
        if status.is_server_error() {
            error!(error = ?self, "server error occurred");
        }

        let body = ErrorBody {
            errors: ErrorMessages {
                body: self.messages(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

/// No content response (204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
