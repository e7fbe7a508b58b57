//! # Domicile — State-Residency Classification
//!
//! Defines the `Domicile` enum. Domicile affects eligibility and quota
//! during counseling; the external store records it as free text, so the
//! wire strings here must match the stored values exactly (including the
//! space in `"Outside Maharashtra"`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// State-residency classification affecting eligibility/quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domicile {
    /// Maharashtra domicile.
    Maharashtra,
    /// Candidates without Maharashtra domicile.
    #[serde(rename = "Outside Maharashtra")]
    OutsideMaharashtra,
}

impl Domicile {
    /// All domiciles in canonical order.
    pub fn all() -> &'static [Domicile] {
        &[Self::Maharashtra, Self::OutsideMaharashtra]
    }

    /// The wire string stored in the external `domicile` columns.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maharashtra => "Maharashtra",
            Self::OutsideMaharashtra => "Outside Maharashtra",
        }
    }
}

impl FromStr for Domicile {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Maharashtra" => Ok(Self::Maharashtra),
            "Outside Maharashtra" => Ok(Self::OutsideMaharashtra),
            other => Err(CoreError::UnknownDomicile(other.to_string())),
        }
    }
}

impl std::fmt::Display for Domicile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings_roundtrip() {
        for dom in Domicile::all() {
            assert_eq!(&Domicile::from_str(dom.as_str()).unwrap(), dom);
        }
    }

    #[test]
    fn test_serde_keeps_embedded_space() {
        let json = serde_json::to_string(&Domicile::OutsideMaharashtra).unwrap();
        assert_eq!(json, "\"Outside Maharashtra\"");
    }

    #[test]
    fn test_unknown_rejected() {
        assert!(Domicile::from_str("Goa").is_err());
    }
}
