//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// `numeric_value_out_of_range`, raised when a line's quantity passes `i32::MAX`.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// Carts service errors.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// The user already has a cart.
    #[error("cart already exists")]
    AlreadyExists,

    /// The user has no cart.
    #[error("cart not found")]
    NotFound,

    /// The item being added is not in the catalog.
    #[error("item not found")]
    ItemNotFound,

    /// A foreign key pointed at a missing row.
    #[error("related resource not found")]
    InvalidReference,

    /// A required value was empty or null.
    #[error("missing required data")]
    MissingRequiredData,

    /// A value broke a column constraint.
    #[error("invalid data")]
    InvalidData,

    /// A line's quantity would pass the storable maximum.
    #[error("cart line quantity limit reached")]
    QuantityOutOfRange,

    /// Any other database failure.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if error
            .as_database_error()
            .and_then(DatabaseError::code)
            .is_some_and(|code| code == NUMERIC_VALUE_OUT_OF_RANGE)
        {
            return Self::QuantityOutOfRange;
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
