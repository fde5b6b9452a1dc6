//! Common types used across the aggregation core

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A due balance older than this many days is overdue.
pub const OVERDUE_AFTER_DAYS: i64 = 7;

/// Stock at or below this quantity (and above zero) is low stock.
pub const LOW_STOCK_LIMIT: i64 = 5;

/// How many parties the dashboard "top dues" cards show.
pub const TOP_DUE_LIMIT: usize = 6;

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DueStatus {
    Paid,
    Partial,
    Due,
    Overdue,
}

impl std::fmt::Display for DueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DueStatus::Paid => write!(f, "Paid"),
            DueStatus::Partial => write!(f, "Partial"),
            DueStatus::Due => write!(f, "Due"),
            DueStatus::Overdue => write!(f, "Overdue"),
        }
    }
}

/// Stock level classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "In Stock"),
            StockStatus::LowStock => write!(f, "Low Stock"),
            StockStatus::OutOfStock => write!(f, "Out of Stock"),
        }
    }
}

/// Which side of the ledger a payment row came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntrySide {
    Sale,
    Purchase,
}

/// Inclusive date range for report filters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }
}

/// Collection fetch envelope.
///
/// The backend returns either `{ "data": [...] }` or a bare array
/// depending on the endpoint; anything else is treated as an empty
/// collection. This is the single place that shape ambiguity lives.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CollectionResponse<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
    Other(serde_json::Value),
}

impl<T> CollectionResponse<T> {
    pub fn into_records(self) -> Vec<T> {
        match self {
            CollectionResponse::Wrapped { data } => data,
            CollectionResponse::Bare(records) => records,
            CollectionResponse::Other(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_range_is_inclusive() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        );
        assert!(range.contains(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
        assert!(range.contains(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
    }

    #[test]
    fn due_status_display_matches_ui_labels() {
        assert_eq!(DueStatus::Paid.to_string(), "Paid");
        assert_eq!(DueStatus::Overdue.to_string(), "Overdue");
        assert_eq!(StockStatus::OutOfStock.to_string(), "Out of Stock");
    }
}
