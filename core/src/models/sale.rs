//! Sales invoice records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{
    fallback_key, lenient_decimal, normalize_key, opt_decimal, parse_day, string_or,
};

/// Fallback party name for anonymous counter sales.
pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

/// A sale as fetched from the sales collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSale {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub invoice_no: Option<String>,
    pub customer_name: Option<String>,
    pub customer_number: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<Value>,
    pub unit_price: Option<Value>,
    pub total_amount: Option<Value>,
    pub paid_amount: Option<Value>,
    pub due_amount: Option<Value>,
    pub payment_method: Option<String>,
    pub date: Option<Value>,
    pub created_at: Option<Value>,
    pub note: Option<String>,
}

impl RawSale {
    /// UI list key: id, then invoice number, then a generated identifier.
    pub fn key(&self) -> String {
        self.id
            .as_deref()
            .or(self.invoice_no.as_deref())
            .map(str::to_string)
            .unwrap_or_else(fallback_key)
    }

    pub fn customer(&self) -> &str {
        string_or(self.customer_name.as_deref(), WALK_IN_CUSTOMER)
    }

    pub fn invoice(&self) -> &str {
        string_or(self.invoice_no.as_deref(), "-")
    }

    pub fn product(&self) -> &str {
        string_or(self.product_name.as_deref(), "-")
    }

    pub fn product_key(&self) -> String {
        normalize_key(self.product())
    }

    pub fn quantity(&self) -> Decimal {
        lenient_decimal(self.quantity.as_ref())
    }

    pub fn unit_price(&self) -> Decimal {
        lenient_decimal(self.unit_price.as_ref())
    }

    pub fn total(&self) -> Decimal {
        lenient_decimal(self.total_amount.as_ref())
    }

    pub fn paid(&self) -> Decimal {
        lenient_decimal(self.paid_amount.as_ref())
    }

    /// Outstanding due. A backend-supplied due amount is trusted as-is;
    /// derivation from total and paid is a display fallback only.
    pub fn due(&self) -> Decimal {
        opt_decimal(self.due_amount.as_ref())
            .unwrap_or_else(|| (self.total() - self.paid()).max(Decimal::ZERO))
    }

    /// Invoice day, preferring `date` over `createdAt`.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day(self.date.as_ref()).or_else(|| parse_day(self.created_at.as_ref()))
    }

    /// True when a date-like value is present but unusable.
    pub fn has_broken_date(&self) -> bool {
        (self.date.is_some() || self.created_at.is_some()) && self.day().is_none()
    }
}
