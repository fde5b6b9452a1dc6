//! Combined payments ledger and account summary

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{RawPurchase, RawSale};
use crate::normalize::format_day;
use crate::types::EntrySide;

/// One ledger entry: a sale or a purchase, as the accounts page shows
/// both sides in a single table.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRow {
    pub key: String,
    pub side: EntrySide,
    pub party_name: String,
    pub invoice_no: String,
    /// `YYYY-MM-DD`, or `"-"` when the record has no usable date.
    pub date: String,
    pub method: Option<String>,
    /// Amount actually paid on this invoice.
    pub amount: Decimal,
    pub due: Decimal,
    pub note: String,
}

/// Account-level totals for the dashboard cards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AccountSummary {
    /// Total sales paid minus total purchases paid.
    pub cash_in_hand: Decimal,
    /// Outstanding customer dues.
    pub receivable: Decimal,
    /// Outstanding supplier dues.
    pub payable: Decimal,
    pub total_sales_paid: Decimal,
    pub total_purchase_paid: Decimal,
}

/// Build the combined ledger, newest date first. Rows without a date
/// sort last.
pub fn payment_rows(sales: &[RawSale], purchases: &[RawPurchase]) -> Vec<PaymentRow> {
    let mut rows: Vec<PaymentRow> = Vec::with_capacity(sales.len() + purchases.len());

    for sale in sales {
        rows.push(PaymentRow {
            key: sale.key(),
            side: EntrySide::Sale,
            party_name: sale.customer().to_string(),
            invoice_no: sale.invoice().to_string(),
            date: format_day(sale.day()),
            method: sale.payment_method.clone(),
            amount: sale.paid(),
            due: sale.due(),
            note: sale.note.clone().unwrap_or_default(),
        });
    }

    for purchase in purchases {
        rows.push(PaymentRow {
            key: purchase.key(),
            side: EntrySide::Purchase,
            party_name: purchase.supplier().to_string(),
            invoice_no: purchase.invoice().to_string(),
            date: format_day(purchase.day()),
            method: purchase.payment_method.clone(),
            amount: purchase.paid(),
            due: purchase.due(),
            note: purchase.note.clone().unwrap_or_default(),
        });
    }

    // the "-" sentinel sorts after any YYYY-MM-DD under this ordering
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

/// Sum both sides into the account summary.
pub fn account_summary(sales: &[RawSale], purchases: &[RawPurchase]) -> AccountSummary {
    let mut total_sales_paid = Decimal::ZERO;
    let mut receivable = Decimal::ZERO;
    for sale in sales {
        total_sales_paid += sale.paid();
        receivable += sale.due();
    }

    let mut total_purchase_paid = Decimal::ZERO;
    let mut payable = Decimal::ZERO;
    for purchase in purchases {
        total_purchase_paid += purchase.paid();
        payable += purchase.due();
    }

    AccountSummary {
        cash_in_hand: total_sales_paid - total_purchase_paid,
        receivable,
        payable,
        total_sales_paid,
        total_purchase_paid,
    }
}
