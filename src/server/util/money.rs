//! Money arithmetic on integer cents.
//!
//! Amounts are stored as `i64` cents and only become `Decimal` at the API boundary.

use rust_decimal::Decimal;

use crate::server::error::{internal::InternalError, AppError};

/// Converts an amount in cents to a two-decimal `Decimal`.
pub fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Price of `quantity` units at `unit_price_cents`.
pub fn line_total_cents(unit_price_cents: i64, quantity: i32) -> Result<i64, AppError> {
    unit_price_cents
        .checked_mul(i64::from(quantity))
        .ok_or_else(|| {
            InternalError::AmountOverflow {
                context: "line total".to_string(),
            }
            .into()
        })
}

/// Sums line totals, failing instead of wrapping on overflow.
pub fn sum_cents<I>(amounts: I) -> Result<i64, AppError>
where
    I: IntoIterator<Item = i64>,
{
    amounts.into_iter().try_fold(0i64, |acc, amount| {
        acc.checked_add(amount).ok_or_else(|| {
            InternalError::AmountOverflow {
                context: "order total".to_string(),
            }
            .into()
        })
    })
}
