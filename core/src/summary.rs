//! Dashboard-level roll-up

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::account_summary;
use crate::due::{top_party_due, PartyDue};
use crate::models::{RawProduct, RawPurchase, RawSale};
use crate::status::stock_status;
use crate::types::StockStatus;

/// Days of history shown in the dashboard trend charts.
const TREND_DAYS: u64 = 7;

/// A product surfaced on the low/out-of-stock cards.
#[derive(Debug, Clone, Serialize)]
pub struct StockAlert {
    pub key: String,
    pub name: String,
    pub sku: String,
    pub qty: Decimal,
}

/// One day of the sales/purchase trend.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DailyFlow {
    pub day: NaiveDate,
    pub sales: Decimal,
    pub purchases: Decimal,
    /// Sales minus purchases.
    pub net: Decimal,
}

/// Everything the dashboard landing page renders.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub total_purchase_invoices: usize,
    pub total_sales_invoices: usize,
    /// Sum of stored product quantities.
    pub total_stock_qty: Decimal,
    pub cash_in_hand: Decimal,
    pub receivable: Decimal,
    pub payable: Decimal,
    pub low_stock: Vec<StockAlert>,
    pub out_of_stock: Vec<StockAlert>,
    pub top_customer_due: Vec<PartyDue>,
    pub top_supplier_due: Vec<PartyDue>,
    /// Last seven days ending at `today`, oldest first.
    pub daily_flow: Vec<DailyFlow>,
}

/// Compute the dashboard summary from the three raw collections.
pub fn dashboard_summary(
    products: &[RawProduct],
    purchases: &[RawPurchase],
    sales: &[RawSale],
    today: NaiveDate,
) -> DashboardSummary {
    tracing::debug!(
        products = products.len(),
        purchases = purchases.len(),
        sales = sales.len(),
        "building dashboard summary"
    );

    let account = account_summary(sales, purchases);

    let mut total_stock_qty = Decimal::ZERO;
    let mut low_stock = Vec::new();
    let mut out_of_stock = Vec::new();
    for product in products {
        let qty = product.stored_quantity();
        total_stock_qty += qty;
        let alert = || StockAlert {
            key: product.key(),
            name: product.display_name().to_string(),
            sku: product.sku.clone().unwrap_or_default(),
            qty,
        };
        match stock_status(qty) {
            StockStatus::LowStock => low_stock.push(alert()),
            StockStatus::OutOfStock => out_of_stock.push(alert()),
            StockStatus::InStock => {}
        }
    }

    DashboardSummary {
        total_products: products.len(),
        total_purchase_invoices: purchases.len(),
        total_sales_invoices: sales.len(),
        total_stock_qty,
        cash_in_hand: account.cash_in_hand,
        receivable: account.receivable,
        payable: account.payable,
        low_stock,
        out_of_stock,
        top_customer_due: top_party_due(sales, |s| s.customer(), |s| s.due()),
        top_supplier_due: top_party_due(purchases, |p| p.supplier(), |p| p.due()),
        daily_flow: daily_flow(sales, purchases, today),
    }
}

/// Per-day sales/purchase totals over the trailing week, oldest first.
/// Every day appears even when nothing happened.
pub fn daily_flow(sales: &[RawSale], purchases: &[RawPurchase], today: NaiveDate) -> Vec<DailyFlow> {
    let start = today
        .checked_sub_days(Days::new(TREND_DAYS - 1))
        .unwrap_or(today);

    let mut flows: Vec<DailyFlow> = (0..TREND_DAYS)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .map(|day| DailyFlow {
            day,
            sales: Decimal::ZERO,
            purchases: Decimal::ZERO,
            net: Decimal::ZERO,
        })
        .collect();

    for sale in sales {
        if let Some(day) = sale.day() {
            if let Some(flow) = flows.iter_mut().find(|f| f.day == day) {
                flow.sales += sale.total();
            }
        }
    }
    for purchase in purchases {
        if let Some(day) = purchase.day() {
            if let Some(flow) = flows.iter_mut().find(|f| f.day == day) {
                flow.purchases += purchase.total();
            }
        }
    }

    for flow in &mut flows {
        flow.net = flow.sales - flow.purchases;
    }
    flows
}
