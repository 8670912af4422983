//! Checkout service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::checkout::pricing::PricingError;

/// Checkout service errors.
#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    /// The cart does not exist or belongs to someone else.
    #[error("cart not found")]
    CartNotFound,

    /// The cart has no lines to order.
    #[error("cart is empty")]
    EmptyCart,

    /// A line or order total does not fit the amount column.
    #[error("order total is out of range")]
    TotalOutOfRange,

    /// A stored row broke a foreign key while writing the order.
    #[error("related resource not found")]
    InvalidReference,

    /// A stored row broke a constraint while writing the order.
    #[error("invalid data")]
    InvalidData,

    /// Any other database failure.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CheckoutServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::CartNotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(_) | None => Self::Sql(error),
        }
    }
}

impl From<PricingError> for CheckoutServiceError {
    fn from(error: PricingError) -> Self {
        match error {
            PricingError::TotalOutOfRange => Self::TotalOutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cart_row_maps_to_cart_not_found() {
        let error = CheckoutServiceError::from(Error::RowNotFound);

        assert!(matches!(error, CheckoutServiceError::CartNotFound));
    }

    #[test]
    fn pricing_overflow_maps_to_total_out_of_range() {
        let error = CheckoutServiceError::from(PricingError::TotalOutOfRange);

        assert!(matches!(error, CheckoutServiceError::TotalOutOfRange));
    }
}
