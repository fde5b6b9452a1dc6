//! Purchase invoice records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{
    fallback_key, lenient_decimal, normalize_key, opt_decimal, parse_day, string_or,
};

/// A purchase as fetched from the purchases collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPurchase {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub invoice_no: Option<String>,
    pub supplier_name: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<Value>,
    pub purchase_price: Option<Value>,
    pub total_amount: Option<Value>,
    pub paid_amount: Option<Value>,
    pub due_amount: Option<Value>,
    pub payment_method: Option<String>,
    pub date: Option<Value>,
    pub created_at: Option<Value>,
    pub note: Option<String>,
}

impl RawPurchase {
    /// UI list key: id, then invoice number, then a generated identifier.
    pub fn key(&self) -> String {
        self.id
            .as_deref()
            .or(self.invoice_no.as_deref())
            .map(str::to_string)
            .unwrap_or_else(fallback_key)
    }

    pub fn supplier(&self) -> &str {
        string_or(self.supplier_name.as_deref(), "-")
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

    pub fn total(&self) -> Decimal {
        lenient_decimal(self.total_amount.as_ref())
    }

    pub fn paid(&self) -> Decimal {
        lenient_decimal(self.paid_amount.as_ref())
    }

    /// Outstanding due, trusting a supplied value and otherwise
    /// deriving `max(total - paid, 0)`.
    pub fn due(&self) -> Decimal {
        opt_decimal(self.due_amount.as_ref())
            .unwrap_or_else(|| (self.total() - self.paid()).max(Decimal::ZERO))
    }

    /// Invoice day, preferring `date` over `createdAt`.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day(self.date.as_ref()).or_else(|| parse_day(self.created_at.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn derives_due_when_absent() {
        let purchase: RawPurchase = serde_json::from_value(json!({
            "supplierName": "Fresh Foods Ltd",
            "totalAmount": 5000,
            "paidAmount": 2000,
            "date": "2026-02-01"
        }))
        .unwrap();

        assert_eq!(purchase.supplier(), "Fresh Foods Ltd");
        assert_eq!(purchase.due(), Decimal::from(3000));
        assert_eq!(purchase.day(), NaiveDate::from_ymd_opt(2026, 2, 1));
    }

    #[test]
    fn missing_supplier_uses_dash() {
        let purchase = RawPurchase::default();
        assert_eq!(purchase.supplier(), "-");
        assert_eq!(purchase.due(), Decimal::ZERO);
    }
}
