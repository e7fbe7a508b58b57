//! # Admission Category — Single Source of Truth
//!
//! Defines the `Category` enum with the five reservation/quota
//! classifications used by MHT-CET counseling. This is the ONE definition
//! used across the workspace; the wire strings match the external store's
//! `category` text columns exactly.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Reservation/quota classification for admission.
///
/// | Variant | Wire string | Meaning |
/// |---------|-------------|---------|
/// | `Open`  | `OPEN`      | Open merit |
/// | `Obc`   | `OBC`       | Other Backward Class |
/// | `Sc`    | `SC`        | Scheduled Caste |
/// | `St`    | `ST`        | Scheduled Tribe |
/// | `Ews`   | `EWS`       | Economically Weaker Section |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Open merit.
    Open,
    /// Other Backward Class.
    Obc,
    /// Scheduled Caste.
    Sc,
    /// Scheduled Tribe.
    St,
    /// Economically Weaker Section.
    Ews,
}

impl Category {
    /// All categories in canonical order.
    pub fn all() -> &'static [Category] {
        &[Self::Open, Self::Obc, Self::Sc, Self::St, Self::Ews]
    }

    /// The wire string stored in the external `category` columns.
    ///
    /// Must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Obc => "OBC",
            Self::Sc => "SC",
            Self::St => "ST",
            Self::Ews => "EWS",
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "OPEN" => Ok(Self::Open),
            "OBC" => Ok(Self::Obc),
            "SC" => Ok(Self::Sc),
            "ST" => Ok(Self::St),
            "EWS" => Ok(Self::Ews),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings_roundtrip() {
        for cat in Category::all() {
            assert_eq!(&Category::from_str(cat.as_str()).unwrap(), cat);
        }
    }

    #[test]
    fn test_serde_matches_as_str() {
        for cat in Category::all() {
            let json = serde_json::to_string(cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));
        }
    }

    #[test]
    fn test_unknown_rejected() {
        assert!(matches!(
            Category::from_str("GENERAL"),
            Err(CoreError::UnknownCategory(_))
        ));
    }
}
