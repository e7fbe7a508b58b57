//! # Error Types — Core Domain Errors
//!
//! Defines the error type for domain primitive construction. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Construction errors carry the offending input verbatim so callers can
//! surface it in notifications without re-threading the raw value.

use thiserror::Error;

/// Errors raised while constructing core domain primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Percentile outside the valid `[0, 100]` range, or not a finite number.
    #[error("percentile must be a finite number between 0 and 100, got: {0}")]
    InvalidPercentile(f64),

    /// Percentile input that did not parse as a number at all.
    #[error("percentile is not numeric: {0:?}")]
    UnparseablePercentile(String),

    /// Category string not in the admission category taxonomy.
    #[error("unknown admission category: {0:?}")]
    UnknownCategory(String),

    /// Domicile string not in the domicile taxonomy.
    #[error("unknown domicile: {0:?}")]
    UnknownDomicile(String),

    /// Timestamp string that is not valid RFC 3339.
    #[error("invalid RFC 3339 timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// The input that failed to parse.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}
