//! Monthly revenue, COGS, and profit aggregation

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostics, Warning};
use crate::models::{RawProduct, RawSale};
use crate::normalize::month_key;
use crate::types::DateRange;

/// Bucket key for sales with no usable date.
pub const UNKNOWN_MONTH: &str = "Unknown";

/// Purchase prices keyed by normalized product name.
#[derive(Debug, Clone, Default)]
pub struct ProductPriceIndex {
    prices: HashMap<String, Decimal>,
}

impl ProductPriceIndex {
    pub fn build(products: &[RawProduct]) -> Self {
        let mut prices = HashMap::new();
        for product in products {
            let key = product.name_key();
            if key.is_empty() || key == "-" {
                continue;
            }
            prices.insert(key, product.purchase_price());
        }
        Self { prices }
    }

    pub fn purchase_price(&self, name_key: &str) -> Option<Decimal> {
        self.prices.get(name_key).copied()
    }
}

/// Filters applied to the sales collection before aggregation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfitFilter {
    /// Case-insensitive substring over product, customer, and invoice.
    pub search: Option<String>,
    /// Exact match on the normalized product name key.
    pub product_key: Option<String>,
    /// Inclusive day range; sales without a date never match a range.
    pub date_range: Option<DateRange>,
}

impl ProfitFilter {
    fn matches(&self, sale: &RawSale) -> bool {
        if let Some(q) = self.search.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let q = q.to_lowercase();
            let hit = sale.product().to_lowercase().contains(&q)
                || sale.customer().to_lowercase().contains(&q)
                || sale.invoice().to_lowercase().contains(&q);
            if !hit {
                return false;
            }
        }

        if let Some(product_key) = self.product_key.as_deref() {
            if sale.product_key() != product_key {
                return false;
            }
        }

        if let Some(range) = &self.date_range {
            match sale.day() {
                Some(day) if range.contains(day) => {}
                _ => return false,
            }
        }

        true
    }
}

/// One calendar month of sales activity.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthlyProfitRow {
    /// `YYYY-MM`, or [`UNKNOWN_MONTH`].
    pub month: String,
    pub total_sold_qty: Decimal,
    pub revenue: Decimal,
    pub cogs: Decimal,
    pub profit: Decimal,
}

/// Report-level totals.
#[derive(Debug, Clone, Serialize)]
pub struct ProfitSummary {
    pub total_profit: Decimal,
    pub total_sold_qty: Decimal,
    pub total_revenue: Decimal,
    pub total_cogs: Decimal,
    /// `"-"` when no rows were produced. Ties go to the first bucket in
    /// month-descending order.
    pub best_month: String,
    pub best_month_profit: Decimal,
}

/// Monthly rows plus summary plus whatever data-quality findings the
/// pass absorbed.
#[derive(Debug, Clone, Serialize)]
pub struct ProfitReport {
    pub rows: Vec<MonthlyProfitRow>,
    pub summary: ProfitSummary,
    pub diagnostics: Diagnostics,
}

#[derive(Default)]
struct Bucket {
    qty: Decimal,
    revenue: Decimal,
    cogs: Decimal,
}

/// Aggregate filtered sales into per-month revenue/COGS/profit rows,
/// sorted by month descending.
///
/// A sale whose product has no catalog entry contributes zero COGS and
/// is reported through the diagnostics channel rather than failing.
pub fn monthly_profit(
    sales: &[RawSale],
    prices: &ProductPriceIndex,
    filter: &ProfitFilter,
) -> ProfitReport {
    tracing::debug!(sales = sales.len(), "aggregating monthly profit");

    let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();
    let mut diagnostics = Diagnostics::default();

    for sale in sales.iter().filter(|s| filter.matches(s)) {
        let qty = sale.quantity();
        let revenue = sale.unit_price() * qty;

        let purchase_price = match prices.purchase_price(&sale.product_key()) {
            Some(price) => price,
            None => {
                diagnostics.record_unknown_product(sale.product());
                Decimal::ZERO
            }
        };
        let cogs = purchase_price * qty;

        let month = match sale.day() {
            Some(day) => month_key(day),
            None => {
                if sale.has_broken_date() {
                    diagnostics.record(Warning::UnparseableDate { record: sale.key() });
                }
                UNKNOWN_MONTH.to_string()
            }
        };

        let bucket = buckets.entry(month).or_default();
        bucket.qty += qty;
        bucket.revenue += revenue;
        bucket.cogs += cogs;
    }

    // BTreeMap iterates ascending; the report wants newest month first.
    let rows: Vec<MonthlyProfitRow> = buckets
        .into_iter()
        .rev()
        .map(|(month, b)| MonthlyProfitRow {
            month,
            total_sold_qty: b.qty,
            revenue: b.revenue,
            cogs: b.cogs,
            // recomputed per row so totals can never drift apart
            profit: b.revenue - b.cogs,
        })
        .collect();

    let summary = summarize(&rows);

    ProfitReport {
        rows,
        summary,
        diagnostics,
    }
}

fn summarize(rows: &[MonthlyProfitRow]) -> ProfitSummary {
    let mut summary = ProfitSummary {
        total_profit: Decimal::ZERO,
        total_sold_qty: Decimal::ZERO,
        total_revenue: Decimal::ZERO,
        total_cogs: Decimal::ZERO,
        best_month: "-".to_string(),
        best_month_profit: Decimal::ZERO,
    };

    let mut best: Option<&MonthlyProfitRow> = None;
    for row in rows {
        summary.total_profit += row.profit;
        summary.total_sold_qty += row.total_sold_qty;
        summary.total_revenue += row.revenue;
        summary.total_cogs += row.cogs;
        // strictly greater keeps the first row (newest month) on ties
        if best.map(|b| row.profit > b.profit).unwrap_or(true) {
            best = Some(row);
        }
    }

    if let Some(best) = best {
        summary.best_month = best.month.clone();
        summary.best_month_profit = best.profit;
    }

    summary
}
