//! Normalization of raw backend records
//!
//! Backend payloads are loose: amounts arrive as numbers or strings,
//! dates as RFC 3339 strings, plain days, or epoch milliseconds, and
//! identifiers under several key names. Everything here coerces those
//! shapes into canonical values without ever failing; invalid input
//! becomes zero, `None`, or the `"-"` sentinel.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CoreResult;
use crate::types::CollectionResponse;

/// Sentinel shown for absent or unparseable dates.
pub const DATE_SENTINEL: &str = "-";

/// Parse a raw collection payload, accepting both the `{ data: [...] }`
/// envelope and a bare array.
pub fn parse_collection<T: DeserializeOwned>(raw: &str) -> CoreResult<Vec<T>> {
    let response: CollectionResponse<T> = serde_json::from_str(raw)?;
    Ok(response.into_records())
}

/// Coerce a loose JSON value to a decimal amount. Finite numbers and
/// parseable strings pass through; everything else is zero.
pub fn lenient_decimal(value: Option<&Value>) -> Decimal {
    opt_decimal(value).unwrap_or(Decimal::ZERO)
}

/// Like [`lenient_decimal`] but preserves absence, so callers can
/// distinguish "not supplied" from "supplied as zero".
pub fn opt_decimal(value: Option<&Value>) -> Option<Decimal> {
    match value? {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Decimal::from(u))
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .and_then(Decimal::from_f64_retain)
            }
        }
        Value::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    }
}

/// Parse a date-like value down to a calendar day. Accepts RFC 3339,
/// naive datetimes, plain `YYYY-MM-DD`, and epoch milliseconds.
pub fn parse_day(value: Option<&Value>) -> Option<NaiveDate> {
    match value? {
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() || s == DATE_SENTINEL {
                return None;
            }
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.date_naive())
                .ok()
                .or_else(|| {
                    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                        .map(|dt| dt.date())
                        .ok()
                })
                .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}

/// Format a day as `YYYY-MM-DD`, or the `"-"` sentinel when absent.
pub fn format_day(day: Option<NaiveDate>) -> String {
    match day {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => DATE_SENTINEL.to_string(),
    }
}

/// `YYYY-MM` bucket key for monthly reports.
pub fn month_key(day: NaiveDate) -> String {
    day.format("%Y-%m").to_string()
}

/// Canonical grouping key: trimmed and lower-cased. Party and product
/// names group case-insensitively so "Acme" and "ACME" are one party.
pub fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Non-empty trimmed string, or the given default.
pub fn string_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => default,
    }
}

/// Last resort in the UI-key fallback chain. Only ever used for list
/// keys, never as a persistence identity.
pub fn fallback_key() -> String {
    uuid::Uuid::new_v4().to_string()
}
