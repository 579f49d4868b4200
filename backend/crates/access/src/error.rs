//! Access Error Types
//!
//! Access-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type AccessResult<T> = Result<T, AccessError>;

#[derive(Debug, Error)]
pub enum AccessError {
    /// Stored session could not be decoded (treated as anonymous by stores)
    #[error("Stored session is malformed")]
    MalformedSession,

    /// Protected resource without a session
    #[error("Authentication required")]
    Unauthorized,

    /// Session present but the role does not own the resource
    #[error("Not allowed for this role")]
    ForbiddenRole,

    /// Credentials rejected by the backend
    #[error("{0}")]
    AuthRejected(String),

    /// Login surface restricted to other roles
    #[error("not authorized for this role")]
    RoleNotAllowed,

    /// Backend unreachable or answered with a server error
    #[error("Connection error, please try again")]
    NetworkFailure(String),

    /// Auth context requested outside of the providing middleware
    #[error("Auth context is not available for this request")]
    ContextMissing,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessError::MalformedSession | AccessError::Unauthorized => ErrorKind::Unauthorized,
            AccessError::AuthRejected(_) => ErrorKind::Unauthorized,
            AccessError::ForbiddenRole | AccessError::RoleNotAllowed => ErrorKind::Forbidden,
            AccessError::NetworkFailure(_) => ErrorKind::BadGateway,
            AccessError::BadRequest(_) => ErrorKind::BadRequest,
            AccessError::ContextMissing | AccessError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Message safe to render inline on a form
    pub fn user_message(&self) -> String {
        match self {
            AccessError::Internal(_) | AccessError::ContextMissing => {
                "Something went wrong, please try again".to_string()
            }
            other => other.to_string(),
        }
    }

    fn log(&self) {
        match self {
            AccessError::ContextMissing => {
                tracing::error!("Auth context extractor used on a route without the provider layer");
            }
            AccessError::Internal(msg) => {
                tracing::error!(message = %msg, "Access internal error");
            }
            AccessError::NetworkFailure(detail) => {
                tracing::warn!(detail = %detail, "Backend auth API unreachable");
            }
            AccessError::AuthRejected(_) | AccessError::RoleNotAllowed => {
                tracing::info!(error = %self, "Login rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Access error");
            }
        }
    }
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<serde_json::Error> for AccessError {
    fn from(err: serde_json::Error) -> Self {
        AccessError::Internal(format!("JSON error: {err}"))
    }
}
