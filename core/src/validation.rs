//! Form-boundary validation
//!
//! The aggregators assume these invariants but never enforce them;
//! create/update forms call these guards before submitting a record.

use rust_decimal::Decimal;

/// Paid amount must be non-negative and never exceed the total.
pub fn validate_payment(total: Decimal, paid: Decimal) -> Result<(), &'static str> {
    if total < Decimal::ZERO {
        return Err("Total amount cannot be negative");
    }
    if paid < Decimal::ZERO {
        return Err("Paid amount cannot be negative");
    }
    if paid > total {
        return Err("Paid amount cannot exceed total amount");
    }
    Ok(())
}

/// Invoice quantity must be positive.
pub fn validate_quantity(qty: Decimal) -> Result<(), &'static str> {
    if qty <= Decimal::ZERO {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// A sale total must equal unit price times quantity.
pub fn validate_sale_total(
    total: Decimal,
    unit_price: Decimal,
    qty: Decimal,
) -> Result<(), &'static str> {
    if total != unit_price * qty {
        return Err("Total amount must equal unit price times quantity");
    }
    Ok(())
}

/// Party names must be non-empty after trimming.
pub fn validate_party_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Party name is required");
    }
    Ok(())
}
