//! Payment and stock status classification

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::{DueStatus, StockStatus, LOW_STOCK_LIMIT, OVERDUE_AFTER_DAYS};

/// A due balance is overdue once its invoice day is more than
/// [`OVERDUE_AFTER_DAYS`] days before `today`. A record with no
/// parseable date is never overdue.
pub fn is_overdue(day: Option<NaiveDate>, today: NaiveDate) -> bool {
    match day {
        Some(d) => (today - d).num_days() > OVERDUE_AFTER_DAYS,
        None => false,
    }
}

/// Classify an invoice's payment status. First match wins:
/// fully paid, then partially paid, then unpaid; the latter two
/// escalate to overdue by invoice age.
pub fn payment_status(
    due: Decimal,
    paid: Decimal,
    day: Option<NaiveDate>,
    today: NaiveDate,
) -> DueStatus {
    if due <= Decimal::ZERO {
        DueStatus::Paid
    } else if paid > Decimal::ZERO {
        if is_overdue(day, today) {
            DueStatus::Overdue
        } else {
            DueStatus::Partial
        }
    } else if is_overdue(day, today) {
        DueStatus::Overdue
    } else {
        DueStatus::Due
    }
}

/// Classify stock level from a quantity.
pub fn stock_status(qty: Decimal) -> StockStatus {
    if qty <= Decimal::ZERO {
        StockStatus::OutOfStock
    } else if qty <= Decimal::from(LOW_STOCK_LIMIT) {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}
