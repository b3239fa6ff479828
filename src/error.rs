use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::auth::jwt::TokenError;

/// Unified error type for store operations that handler code can match on.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database cannot be reached (pool exhausted, connection
    /// refused, TLS failure). Routes surface this as 503.
    #[error("store unavailable")]
    Unavailable,

    /// Unique constraint violation (duplicate email).
    #[error("duplicate key")]
    Conflict,

    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StoreError::Unavailable,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Conflict,
            _ => StoreError::Database(err),
        }
    }
}

/// Request-level error taxonomy. Every variant maps deterministically to a
/// status code; the transport layer never inspects message text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("User already exists with this email")]
    EmailTaken,

    /// Uniform response for unknown email and wrong password, so responses
    /// cannot be used to enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing Authorization header")]
    MissingToken,

    /// An Authorization header was supplied, but not in `Bearer <token>` form.
    #[error("Invalid Authorization header")]
    InvalidAuthScheme,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Not authorized, user not found")]
    IdentityNotFound,

    #[error("Not authorized to modify this {0}")]
    Forbidden(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database not connected")]
    Unavailable,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => ApiError::Unavailable,
            StoreError::Conflict => ApiError::EmailTaken,
            StoreError::Database(e) => ApiError::Internal(e.into()),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::EmailTaken => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials
            | ApiError::MissingToken
            | ApiError::InvalidAuthScheme
            | ApiError::Token(_)
            | ApiError::IdentityNotFound => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            // Internal detail goes to the log, never to the client.
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                "Something went wrong".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}
