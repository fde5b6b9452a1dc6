//! Data-quality diagnostics
//!
//! The aggregators never fail on dirty data; unmatched products,
//! broken dates, and the like are absorbed into zero values so the
//! dashboard keeps rendering. This channel makes those absorptions
//! observable instead of silent.

use serde::Serialize;

/// A single data-quality finding.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A sale references a product name with no catalog match; its
    /// COGS contribution was zero.
    UnknownProduct { product: String },
    /// A record carried a date value that could not be parsed.
    UnparseableDate { record: String },
}

/// Accumulated warnings from one aggregation pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    pub warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn record(&mut self, warning: Warning) {
        tracing::warn!(warning = ?warning, "data quality issue absorbed");
        self.warnings.push(warning);
    }

    /// Record an unknown product once per distinct name.
    pub fn record_unknown_product(&mut self, product: &str) {
        let already_seen = self.warnings.iter().any(|w| {
            matches!(w, Warning::UnknownProduct { product: p } if p == product)
        });
        if !already_seen {
            self.record(Warning::UnknownProduct {
                product: product.to_string(),
            });
        }
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
