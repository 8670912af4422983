//! Order pricing.
//!
//! Amounts are minor units and must fit the signed 64-bit storage column.

use thiserror::Error;

use crate::domain::carts::records::CartLineRecord;

/// Largest amount that can be persisted.
pub const MAX_AMOUNT: u64 = i64::MAX.unsigned_abs();

/// Order pricing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Overflowed `u64` or exceeded [`MAX_AMOUNT`].
    #[error("order total is out of range")]
    TotalOutOfRange,
}

/// Price of `quantity` units at `price` each.
///
/// # Errors
///
/// Returns [`PricingError::TotalOutOfRange`] on overflow or when the result
/// exceeds [`MAX_AMOUNT`].
pub fn line_total(price: u64, quantity: u32) -> Result<u64, PricingError> {
    price
        .checked_mul(u64::from(quantity))
        .filter(|total| *total <= MAX_AMOUNT)
        .ok_or(PricingError::TotalOutOfRange)
}

/// Sum of every line's total.
///
/// # Errors
///
/// Returns [`PricingError::TotalOutOfRange`] when any line or the running
/// total overflows or exceeds [`MAX_AMOUNT`].
pub fn order_total(lines: &[CartLineRecord]) -> Result<u64, PricingError> {
    lines.iter().try_fold(0_u64, |total, line| {
        total
            .checked_add(line_total(line.price, line.quantity)?)
            .filter(|total| *total <= MAX_AMOUNT)
            .ok_or(PricingError::TotalOutOfRange)
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::{carts::records::CartItemUuid, items::records::ItemUuid};

    use super::*;

    fn line(price: u64, quantity: u32) -> CartLineRecord {
        CartLineRecord {
            uuid: CartItemUuid::new(),
            item_uuid: ItemUuid::new(),
            name: "Line".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn order_total_sums_price_times_quantity() {
        let total = order_total(&[line(10, 2), line(5, 1)]);

        assert_eq!(total, Ok(25));
    }

    #[test]
    fn order_total_of_no_lines_is_zero() {
        assert_eq!(order_total(&[]), Ok(0));
    }

    #[test]
    fn line_total_rejects_multiplication_overflow() {
        assert_eq!(
            line_total(u64::MAX, 2),
            Err(PricingError::TotalOutOfRange)
        );
    }

    #[test]
    fn line_total_rejects_amounts_beyond_storage_range() {
        assert_eq!(
            line_total(MAX_AMOUNT, 1),
            Ok(MAX_AMOUNT),
            "the maximum itself is storable"
        );
        assert_eq!(
            line_total(MAX_AMOUNT + 1, 1),
            Err(PricingError::TotalOutOfRange)
        );
    }

    #[test]
    fn order_total_rejects_sum_overflow() {
        let result = order_total(&[line(MAX_AMOUNT, 1), line(1, 1)]);

        assert_eq!(result, Err(PricingError::TotalOutOfRange));
    }
}
