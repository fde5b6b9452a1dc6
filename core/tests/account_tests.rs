//! Accounts and dashboard roll-up tests
//!
//! Drives the combined payments ledger, the account summary, and the
//! full dashboard summary from raw envelope payloads, the way the
//! browser bindings do.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

use stocklens_core::{
    account_summary, dashboard_summary, parse_collection, payment_rows, EntrySide, RawProduct,
    RawPurchase, RawSale,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()
}

fn sale(customer: &str, total: i64, paid: i64, date: &str) -> RawSale {
    serde_json::from_value(json!({
        "customerName": customer,
        "totalAmount": total,
        "paidAmount": paid,
        "date": date
    }))
    .unwrap()
}

fn purchase(supplier: &str, total: i64, paid: i64, date: &str) -> RawPurchase {
    serde_json::from_value(json!({
        "supplierName": supplier,
        "totalAmount": total,
        "paidAmount": paid,
        "date": date
    }))
    .unwrap()
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn ledger_merges_both_sides_newest_first() {
    let sales = vec![
        sale("Rahim Traders", 1000, 800, "2026-01-10"),
        sale("Nabila Store", 500, 500, "2026-01-15"),
    ];
    let purchases = vec![purchase("Fresh Foods", 700, 700, "2026-01-12")];

    let rows = payment_rows(&sales, &purchases);
    let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2026-01-15", "2026-01-12", "2026-01-10"]);
    assert_eq!(rows[1].side, EntrySide::Purchase);
    assert_eq!(rows[2].amount, Decimal::from(800));
    assert_eq!(rows[2].due, Decimal::from(200));
}

#[test]
fn cash_in_hand_can_go_negative() {
    let sales = vec![sale("Rahim Traders", 100, 100, "2026-01-10")];
    let purchases = vec![purchase("Fresh Foods", 500, 400, "2026-01-10")];

    let summary = account_summary(&sales, &purchases);
    assert_eq!(summary.cash_in_hand, Decimal::from(-300));
    assert_eq!(summary.payable, Decimal::from(100));
}

#[test]
fn dashboard_from_raw_envelope_payloads() {
    let products: Vec<RawProduct> = parse_collection(
        r#"{"data":[
            {"name":"Rice","sku":"R-1","quantity":40},
            {"name":"Oil","sku":"O-1","quantity":2}
        ]}"#,
    )
    .unwrap();
    let sales: Vec<RawSale> = parse_collection(
        r#"[{"customerName":"Rahim Traders","totalAmount":1000,"paidAmount":600,
             "date":"2026-01-19"}]"#,
    )
    .unwrap();
    let purchases: Vec<RawPurchase> = parse_collection(
        r#"[{"supplierName":"Fresh Foods","totalAmount":400,"paidAmount":400,
             "date":"2026-01-18"}]"#,
    )
    .unwrap();

    let summary = dashboard_summary(&products, &purchases, &sales, today());
    assert_eq!(summary.total_products, 2);
    assert_eq!(summary.total_stock_qty, Decimal::from(42));
    assert_eq!(summary.cash_in_hand, Decimal::from(200));
    assert_eq!(summary.receivable, Decimal::from(400));
    assert_eq!(summary.low_stock.len(), 1);
    assert_eq!(summary.low_stock[0].sku, "O-1");
    assert_eq!(summary.top_customer_due[0].name, "Rahim Traders");
    assert!(summary.top_supplier_due.is_empty());

    let flows = &summary.daily_flow;
    assert_eq!(flows.len(), 7);
    assert_eq!(flows[6].day, today());
    assert_eq!(flows[5].sales, Decimal::from(1000));
    assert_eq!(flows[4].purchases, Decimal::from(400));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The ledger loses no entries and the summary equals the sum of
    /// ledger amounts on each side.
    #[test]
    fn ledger_and_summary_agree(
        sale_amounts in proptest::collection::vec((0i64..5000, 0i64..5000), 0..20),
        purchase_amounts in proptest::collection::vec((0i64..5000, 0i64..5000), 0..20),
    ) {
        let sales: Vec<RawSale> = sale_amounts
            .iter()
            .map(|&(total, paid)| sale("C", total, paid.min(total), "2026-01-10"))
            .collect();
        let purchases: Vec<RawPurchase> = purchase_amounts
            .iter()
            .map(|&(total, paid)| purchase("S", total, paid.min(total), "2026-01-10"))
            .collect();

        let rows = payment_rows(&sales, &purchases);
        prop_assert_eq!(rows.len(), sales.len() + purchases.len());

        let summary = account_summary(&sales, &purchases);
        let ledger_sales: Decimal = rows
            .iter()
            .filter(|r| r.side == EntrySide::Sale)
            .map(|r| r.amount)
            .sum();
        let ledger_purchases: Decimal = rows
            .iter()
            .filter(|r| r.side == EntrySide::Purchase)
            .map(|r| r.amount)
            .sum();
        prop_assert_eq!(summary.total_sales_paid, ledger_sales);
        prop_assert_eq!(summary.total_purchase_paid, ledger_purchases);
        prop_assert_eq!(summary.cash_in_hand, ledger_sales - ledger_purchases);
    }
}
