//! Error handling for the aggregation core
//!
//! Aggregation itself never fails: dirty values coerce to zero or
//! sentinel strings and data-quality problems go to the diagnostics
//! channel. The only fallible boundary is parsing a collection payload
//! out of JSON.

use thiserror::Error;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid collection payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Result type alias for the core
pub type CoreResult<T> = Result<T, CoreError>;
