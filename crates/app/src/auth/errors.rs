//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

use crate::auth::{PasswordError, SessionTokenError};

/// Auth service errors.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// No live session matches the token.
    #[error("session not found")]
    NotFound,

    /// Unknown username or wrong password.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Database failure.
    #[error("storage error")]
    Sql(#[source] Error),

    /// The bearer value is not a well-formed session token.
    #[error("token processing error")]
    Token(#[source] SessionTokenError),

    /// The stored password hash could not be checked.
    #[error("password verification error")]
    Password(#[from] PasswordError),

    /// The session TTL pushed the expiry past the representable range.
    #[error("session expiry is out of range")]
    Expiry(#[source] jiff::Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}

impl From<SessionTokenError> for AuthServiceError {
    fn from(error: SessionTokenError) -> Self {
        Self::Token(error)
    }
}
