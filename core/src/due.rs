//! Customer and supplier due aggregation

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{RawPurchase, RawSale};
use crate::normalize::{format_day, normalize_key};
use crate::status::payment_status;
use crate::types::{DueStatus, TOP_DUE_LIMIT};

/// One outstanding invoice in a due-management table.
#[derive(Debug, Clone, Serialize)]
pub struct DueRow {
    pub key: String,
    pub party: String,
    pub invoice_no: String,
    /// `YYYY-MM-DD`, or `"-"` when the record has no usable date.
    pub date: String,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub due_amount: Decimal,
    pub status: DueStatus,
    pub payment_method: Option<String>,
    pub note: String,
}

/// Summed outstanding due for one party.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PartyDue {
    pub name: String,
    pub amount: Decimal,
}

/// Due rows for the customer side: one row per sale with an
/// outstanding balance, fully paid invoices excluded.
pub fn customer_due_rows(sales: &[RawSale], today: NaiveDate) -> Vec<DueRow> {
    sales
        .iter()
        .filter(|s| s.due() > Decimal::ZERO)
        .map(|s| DueRow {
            key: s.key(),
            party: s.customer().to_string(),
            invoice_no: s.invoice().to_string(),
            date: format_day(s.day()),
            total_amount: s.total(),
            paid_amount: s.paid(),
            due_amount: s.due(),
            status: payment_status(s.due(), s.paid(), s.day(), today),
            payment_method: s.payment_method.clone(),
            note: s.note.clone().unwrap_or_default(),
        })
        .collect()
}

/// Due rows for the supplier side: one row per purchase with an
/// outstanding balance.
pub fn supplier_due_rows(purchases: &[RawPurchase], today: NaiveDate) -> Vec<DueRow> {
    purchases
        .iter()
        .filter(|p| p.due() > Decimal::ZERO)
        .map(|p| DueRow {
            key: p.key(),
            party: p.supplier().to_string(),
            invoice_no: p.invoice().to_string(),
            date: format_day(p.day()),
            total_amount: p.total(),
            paid_amount: p.paid(),
            due_amount: p.due(),
            status: payment_status(p.due(), p.paid(), p.day(), today),
            payment_method: p.payment_method.clone(),
            note: p.note.clone().unwrap_or_default(),
        })
        .collect()
}

/// Roll outstanding dues up per party.
///
/// Parties group by trimmed, case-folded name; the displayed name is
/// the first spelling seen. Output is sorted by summed due descending,
/// ties broken by first-seen order.
pub fn aggregate_party_due<T>(
    records: &[T],
    party_name: impl Fn(&T) -> &str,
    due: impl Fn(&T) -> Decimal,
) -> Vec<PartyDue> {
    let mut order: Vec<PartyDue> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let amount = due(record);
        if amount <= Decimal::ZERO {
            continue;
        }
        let name = party_name(record);
        let key = normalize_key(name);
        match index.get(&key) {
            Some(&i) => order[i].amount += amount,
            None => {
                index.insert(key, order.len());
                order.push(PartyDue {
                    name: name.trim().to_string(),
                    amount,
                });
            }
        }
    }

    // stable sort keeps first-seen order for equal amounts
    order.sort_by(|a, b| b.amount.cmp(&a.amount));
    order
}

/// Dashboard variant of [`aggregate_party_due`], capped at
/// [`TOP_DUE_LIMIT`] parties.
pub fn top_party_due<T>(
    records: &[T],
    party_name: impl Fn(&T) -> &str,
    due: impl Fn(&T) -> Decimal,
) -> Vec<PartyDue> {
    let mut dues = aggregate_party_due(records, party_name, due);
    dues.truncate(TOP_DUE_LIMIT);
    dues
}
