//! Stock movement aggregation

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RawProduct, RawPurchase, RawSale};
use crate::status::stock_status;
use crate::types::StockStatus;

/// Which source of truth `current_stock` is taken from.
///
/// The stored product quantity and the purchase/sale movement sums can
/// disagree; the policy must be explicit rather than silently mixing
/// the two.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockAuthority {
    /// The product's stored `quantity` is always authoritative;
    /// movement sums are informational audit columns only. This is the
    /// recommended policy: the sale/purchase flows update the stored
    /// quantity transactionally.
    #[default]
    StoredQuantity,
    /// Legacy behavior: stored quantity when positive, otherwise the
    /// clamped movement balance. Conflates "out of stock" with "never
    /// counted".
    MovementFallback,
}

/// One product's stock position.
#[derive(Debug, Clone, Serialize)]
pub struct StockRow {
    pub key: String,
    pub product_name: String,
    pub sku: String,
    pub category: String,
    pub purchase_price: Decimal,
    pub sale_price: Decimal,
    pub stock_in: Decimal,
    pub stock_out: Decimal,
    pub current_stock: Decimal,
    pub status: StockStatus,
}

/// Quantity sums keyed by product id where available and by normalized
/// product name otherwise. A record contributes under exactly one key.
#[derive(Debug, Default)]
struct MovementMap {
    by_id: HashMap<String, Decimal>,
    by_name: HashMap<String, Decimal>,
}

impl MovementMap {
    fn add(&mut self, product_id: Option<&str>, name_key: String, qty: Decimal) {
        match product_id {
            Some(id) if !id.is_empty() => {
                *self.by_id.entry(id.to_string()).or_default() += qty;
            }
            _ => {
                if name_key != "-" {
                    *self.by_name.entry(name_key).or_default() += qty;
                }
            }
        }
    }

    fn total_for(&self, product: &RawProduct) -> Decimal {
        let by_id = product
            .id
            .as_deref()
            .and_then(|id| self.by_id.get(id))
            .copied()
            .unwrap_or(Decimal::ZERO);
        let by_name = self
            .by_name
            .get(&product.name_key())
            .copied()
            .unwrap_or(Decimal::ZERO);
        by_id + by_name
    }
}

/// Build one stock row per catalog product from purchase (stock-in) and
/// sale (stock-out) movement, with `current_stock` resolved per the
/// given authority.
pub fn aggregate_stock(
    products: &[RawProduct],
    purchases: &[RawPurchase],
    sales: &[RawSale],
    authority: StockAuthority,
) -> Vec<StockRow> {
    tracing::debug!(
        products = products.len(),
        purchases = purchases.len(),
        sales = sales.len(),
        "aggregating stock movement"
    );

    let mut stock_in = MovementMap::default();
    for purchase in purchases {
        stock_in.add(
            purchase.product_id.as_deref(),
            purchase.product_key(),
            purchase.quantity(),
        );
    }

    let mut stock_out = MovementMap::default();
    for sale in sales {
        stock_out.add(sale.product_id.as_deref(), sale.product_key(), sale.quantity());
    }

    products
        .iter()
        .map(|product| {
            let in_qty = stock_in.total_for(product);
            let out_qty = stock_out.total_for(product);
            let movement = (in_qty - out_qty).max(Decimal::ZERO);
            let stored = product.stored_quantity();

            let current_stock = match authority {
                StockAuthority::StoredQuantity => stored,
                StockAuthority::MovementFallback => {
                    if stored > Decimal::ZERO {
                        stored
                    } else {
                        movement
                    }
                }
            };

            StockRow {
                key: product.key(),
                product_name: product.display_name().to_string(),
                sku: product.sku.clone().unwrap_or_default(),
                category: product.category.clone().unwrap_or_default(),
                purchase_price: product.purchase_price(),
                sale_price: product.sale_price(),
                stock_in: in_qty,
                stock_out: out_qty,
                current_stock,
                status: stock_status(current_stock),
            }
        })
        .collect()
}
