//! Order total reconciliation.
//!
//! Recomputes what an order should cost from its line items and delivery fee and
//! compares that with the total the client submitted. All arithmetic is exact
//! decimal arithmetic; only the final sums are rounded to two decimal places,
//! half away from zero.
//!
//! The validator does not judge individual prices or quantities. Range checks
//! belong to request validation (see [`crate::api::dto::order`]).

use rust_decimal::prelude::*;

use crate::domain::entities::Order;

/// Minor-unit precision for monetary comparisons.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Reasons an order is refused. Always a client-input problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderRejection {
    #[error("Total does not match order items")]
    TotalMismatch { expected: Decimal, submitted: Decimal },

    #[error("Order amounts are out of range")]
    AmountOutOfRange,
}

/// Rounds a monetary amount to two decimal places, half away from zero.
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `Σ price × quantity` over all line items, unrounded.
pub fn subtotal(order: &Order) -> Result<Decimal, OrderRejection> {
    order.items.iter().try_fold(Decimal::ZERO, |acc, line| {
        line.line_total()
            .and_then(|line_total| acc.checked_add(line_total))
            .ok_or(OrderRejection::AmountOutOfRange)
    })
}

/// `round(subtotal + delivery_fee, 2)`.
pub fn expected_total(order: &Order) -> Result<Decimal, OrderRejection> {
    subtotal(order)?
        .checked_add(order.delivery_fee)
        .map(round_money)
        .ok_or(OrderRejection::AmountOutOfRange)
}

/// Accepts the order iff `round(total, 2)` equals the recomputed total.
///
/// # Errors
///
/// Returns [`OrderRejection::TotalMismatch`] when the submitted total differs.
/// Returns [`OrderRejection::AmountOutOfRange`] when the amounts overflow.
pub fn validate(order: &Order) -> Result<(), OrderRejection> {
    let expected = expected_total(order)?;
    let submitted = round_money(order.total);

    if expected != submitted {
        return Err(OrderRejection::TotalMismatch {
            expected,
            submitted,
        });
    }

    Ok(())
}
