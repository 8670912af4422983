//! Items service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Items service errors.
#[derive(Debug, Error)]
pub enum ItemsServiceError {
    /// An item with this uuid already exists.
    #[error("item already exists")]
    AlreadyExists,

    /// No item has this uuid.
    #[error("item not found")]
    NotFound,

    /// A foreign key pointed at a missing row.
    #[error("related resource not found")]
    InvalidReference,

    /// The name was blank or a required value was null.
    #[error("missing required data")]
    MissingRequiredData,

    /// The price is outside the storable range or broke a constraint.
    #[error("invalid data")]
    InvalidData,

    /// Any other database failure.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ItemsServiceError {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = ItemsServiceError::from(Error::RowNotFound);

        assert!(matches!(error, ItemsServiceError::NotFound));
    }

    #[test]
    fn other_errors_are_kept_as_storage_errors() {
        let error = ItemsServiceError::from(Error::PoolTimedOut);

        assert!(matches!(error, ItemsServiceError::Sql(Error::PoolTimedOut)));
    }
}
