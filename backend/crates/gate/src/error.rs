//! Gate Error Types
//!
//! This module provides gate-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::role::Role;

/// Gate-specific result type alias
pub type GateResult<T> = Result<T, GateError>;

/// Body message for every 5xx; details stay in the logs
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Gate-specific error variants
#[derive(Debug, Error)]
pub enum GateError {
    /// Session role segment is not student/admin/staff
    #[error("Unknown session role: {0}")]
    InvalidRole(String),

    /// Refresh requested without a refresh cookie
    #[error("No session to refresh")]
    MissingToken,

    /// Identity backend could not be reached (network, DNS, timeout, bad URL)
    #[error("Identity backend unreachable for {role}: {message}")]
    Upstream { role: Role, message: String },

    /// Origin could not be reached
    #[error("Origin unreachable: {0}")]
    Origin(String),
}

impl GateError {
    pub fn upstream(role: Role, err: impl std::fmt::Display) -> Self {
        GateError::Upstream {
            role,
            message: err.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GateError::InvalidRole(_) => StatusCode::NOT_FOUND,
            GateError::MissingToken => StatusCode::UNAUTHORIZED,
            GateError::Origin(_) => StatusCode::BAD_GATEWAY,
            GateError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GateError::InvalidRole(_) => ErrorKind::NotFound,
            GateError::MissingToken => ErrorKind::Unauthorized,
            GateError::Origin(_) => ErrorKind::BadGateway,
            GateError::Upstream { .. } => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, hiding server-side details
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => AppError::internal(INTERNAL_ERROR_MESSAGE),
            ErrorKind::BadGateway => AppError::bad_gateway("Bad gateway"),
            kind => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GateError::Upstream { role, message } => {
                tracing::error!(role = %role, error = %message, "Identity backend unreachable");
            }
            GateError::Origin(message) => {
                tracing::error!(error = %message, "Origin unreachable");
            }
            _ => {
                tracing::debug!(error = %self, "Gate error");
            }
        }
    }
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
