//! Users service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::auth::PasswordError;

/// Users service errors.
#[derive(Debug, Error)]
pub enum UsersServiceError {
    /// The username is taken.
    #[error("user already exists")]
    AlreadyExists,

    /// No user has this uuid.
    #[error("user not found")]
    NotFound,

    /// A foreign key pointed at a missing row.
    #[error("related resource not found")]
    InvalidReference,

    /// A required value was empty or null.
    #[error("missing required data")]
    MissingRequiredData,

    /// A value broke a column constraint.
    #[error("invalid data")]
    InvalidData,

    /// Any other database failure.
    #[error("storage error")]
    Sql(#[source] Error),

    /// The password could not be hashed.
    #[error("password hashing failed")]
    PasswordHash(#[from] PasswordError),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
