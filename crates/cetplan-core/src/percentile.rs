//! # Percentile — Validated Exam Score
//!
//! Defines `Percentile`, the applicant's competitive-exam score on the
//! `[0, 100]` scale. All percentile values in the system flow through
//! `Percentile::new()` — there is no constructor that admits an
//! out-of-range or non-finite value.
//!
//! Closing percentiles from reference data use the same scale but are kept
//! as plain `f64` threshold fields on rule records, since they are data the
//! system reads rather than user input the system must validate.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A validated exam percentile in `[0, 100]`.
///
/// # Construction
///
/// - [`Percentile::new()`] — from an `f64`, rejecting out-of-range and
///   non-finite values.
/// - [`Percentile::parse()`] — from a raw form field, distinguishing
///   "not a number at all" from "a number outside the scale".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Percentile(f64);

impl Percentile {
    /// Create a percentile, rejecting values outside `[0, 100]` and
    /// non-finite floats (NaN, infinities).
    pub fn new(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(CoreError::InvalidPercentile(value));
        }
        Ok(Self(value))
    }

    /// Parse a percentile from a raw form field.
    ///
    /// # Errors
    ///
    /// - [`CoreError::UnparseablePercentile`] if the input is not numeric.
    /// - [`CoreError::InvalidPercentile`] if it is numeric but out of range.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let value: f64 = input
            .trim()
            .parse()
            .map_err(|_| CoreError::UnparseablePercentile(input.to_string()))?;
        Self::new(value)
    }

    /// The inner score value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Percentile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bounds_accepted() {
        assert!(Percentile::new(0.0).is_ok());
        assert!(Percentile::new(100.0).is_ok());
        assert!(Percentile::new(96.0).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Percentile::new(-0.1).is_err());
        assert!(Percentile::new(100.1).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Percentile::new(f64::NAN).is_err());
        assert!(Percentile::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Percentile::parse(" 91.5 ").unwrap().value(), 91.5);
    }

    #[test]
    fn test_parse_distinguishes_error_kinds() {
        assert!(matches!(
            Percentile::parse("ninety"),
            Err(CoreError::UnparseablePercentile(_))
        ));
        assert!(matches!(
            Percentile::parse("101"),
            Err(CoreError::InvalidPercentile(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_in_range_always_constructible(v in 0.0f64..=100.0) {
            let p = Percentile::new(v).unwrap();
            prop_assert_eq!(p.value(), v);
        }

        #[test]
        fn prop_out_of_range_always_rejected(v in 100.0f64..1e6) {
            prop_assume!(v > 100.0);
            prop_assert!(Percentile::new(v).is_err());
        }
    }
}
