//! Product catalog records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{fallback_key, lenient_decimal, normalize_key, string_or};

/// A product as fetched from the catalog collection.
///
/// Amounts and quantity are kept as loose JSON values; the backend
/// sends them as numbers or strings depending on which form created
/// the record. Accessors apply the lenient coercion rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProduct {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    #[serde(alias = "productName")]
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub purchase_price: Option<Value>,
    pub sale_price: Option<Value>,
    pub quantity: Option<Value>,
    pub note: Option<String>,
}

impl RawProduct {
    /// UI list key: id, then SKU, then a generated identifier.
    pub fn key(&self) -> String {
        self.id
            .as_deref()
            .or(self.sku.as_deref())
            .map(str::to_string)
            .unwrap_or_else(fallback_key)
    }

    pub fn display_name(&self) -> &str {
        string_or(self.name.as_deref(), "-")
    }

    /// Grouping key shared with sales and purchases.
    pub fn name_key(&self) -> String {
        normalize_key(self.display_name())
    }

    pub fn purchase_price(&self) -> Decimal {
        lenient_decimal(self.purchase_price.as_ref())
    }

    pub fn sale_price(&self) -> Decimal {
        lenient_decimal(self.sale_price.as_ref())
    }

    /// Stored stock quantity, the authoritative count under the default
    /// stock policy.
    pub fn stored_quantity(&self) -> Decimal {
        lenient_decimal(self.quantity.as_ref())
    }
}
