//! # Probability Label — Three-Level Admission Chance
//!
//! Defines the `Probability` label attached to each college prediction.
//! Inside the workspace the label is this enum; once a prediction list has
//! been serialized into a `user_predictions.predicted_colleges` snapshot it
//! travels as an untyped JSON string, so rendering code must go through
//! [`Probability::from_label`] and handle the `None` arm rather than assume
//! the three known values.

use serde::{Deserialize, Serialize};

/// Three-level admission probability for one college/branch prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Probability {
    /// Submitted percentile at or above the closing percentile.
    High,
    /// Within the per-record medium band below the closing percentile.
    Medium,
    /// Below the medium band.
    Low,
}

impl Probability {
    /// The label string used in serialized prediction snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Parse a label from an untyped snapshot. Returns `None` for anything
    /// that is not one of the three known labels — snapshot JSON is not
    /// type-constrained, so callers must keep a fallback branch.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
