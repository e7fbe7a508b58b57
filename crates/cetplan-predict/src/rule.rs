//! # Prediction Rules
//!
//! A rule is one (college, branch) reference record with its own closing
//! percentile and medium band width. A rule set is the injected
//! configuration the engine evaluates: the rules plus the single filter
//! band width that decides which entries are shown at all.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cetplan_store::ClosingCutoff;

/// Width of the visibility filter band below a rule's closing percentile.
/// Broader than any sample medium band, so everything filtered out is
/// strictly low-probability-and-far.
pub const DEFAULT_FILTER_BAND_WIDTH: f64 = 5.0;

/// Medium band width assigned when deriving rules from stored cutoff rows,
/// which carry no band of their own.
pub const DEFAULT_MEDIUM_BAND_WIDTH: f64 = 2.2;

/// One reference record: a college/branch offering and its thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRule {
    pub college_name: String,
    pub college_code: String,
    pub location: String,
    /// Institution type, e.g. `Government`, `Private`.
    pub college_type: String,
    pub branch_name: String,
    pub degree_type: String,
    /// Lowest admitted percentile in the reference round.
    pub closing_percentile: f64,
    /// Width of this record's medium band below the closing percentile.
    /// Per-record data, not derived from a formula.
    pub medium_band_width: f64,
}

impl PredictionRule {
    /// The lowest percentile this record labels `Medium`.
    pub fn medium_threshold(&self) -> f64 {
        self.closing_percentile - self.medium_band_width
    }

    /// Derive a rule from a stored cutoff tuple with the given band width.
    pub fn from_cutoff(cutoff: &ClosingCutoff, medium_band_width: f64) -> Self {
        Self {
            college_name: cutoff.college_name.clone(),
            college_code: cutoff.college_code.clone(),
            location: cutoff.location.clone(),
            college_type: cutoff.college_type.clone(),
            branch_name: cutoff.branch_name.clone(),
            degree_type: cutoff.degree_type.clone(),
            closing_percentile: cutoff.closing_percentile,
            medium_band_width,
        }
    }
}

/// Error while loading a rule set from a document.
#[derive(Error, Debug)]
pub enum RuleSetError {
    /// The document failed parsing or schema validation.
    #[error(transparent)]
    Document(#[from] cetplan_schema::RuleDocumentError),

    /// The document validated but did not deserialize into rule records.
    /// Indicates drift between the embedded schema and these structs.
    #[error("rule document shape mismatch: {0}")]
    Shape(#[from] serde_json::Error),
}

/// The injected rule configuration the engine evaluates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Visibility filter band width; entries further than this below their
    /// closing percentile are dropped from results.
    #[serde(default = "default_filter_band_width")]
    pub filter_band_width: f64,
    pub rules: Vec<PredictionRule>,
}

fn default_filter_band_width() -> f64 {
    DEFAULT_FILTER_BAND_WIDTH
}

impl RuleSet {
    /// The built-in sample set: three Maharashtra engineering offerings
    /// with hand-picked medium band widths. Placeholder reference data
    /// until real cutoff rows feed [`RuleSet::from_cutoffs`].
    pub fn sample() -> Self {
        Self {
            filter_band_width: DEFAULT_FILTER_BAND_WIDTH,
            rules: vec![
                PredictionRule {
                    college_name: "Veermata Jijabai Technological Institute".into(),
                    college_code: "VJTI".into(),
                    location: "Mumbai".into(),
                    college_type: "Government".into(),
                    branch_name: "Computer Engineering".into(),
                    degree_type: "BE".into(),
                    closing_percentile: 95.2,
                    medium_band_width: 2.2,
                },
                PredictionRule {
                    college_name: "Government College of Engineering Pune".into(),
                    college_code: "COEP".into(),
                    location: "Pune".into(),
                    college_type: "Government".into(),
                    branch_name: "Information Technology".into(),
                    degree_type: "BE".into(),
                    closing_percentile: 94.8,
                    medium_band_width: 2.3,
                },
                PredictionRule {
                    college_name: "Sardar Patel Institute of Technology".into(),
                    college_code: "SPIT".into(),
                    location: "Mumbai".into(),
                    college_type: "Private".into(),
                    branch_name: "Computer Engineering".into(),
                    degree_type: "BE".into(),
                    closing_percentile: 92.5,
                    medium_band_width: 2.5,
                },
            ],
        }
    }

    /// Load a rule set from a YAML document, validating against the
    /// embedded schema first.
    pub fn from_yaml(input: &str) -> Result<Self, RuleSetError> {
        let doc = cetplan_schema::rule_document_from_yaml(input)?;
        cetplan_schema::validate_rule_document(&doc)?;
        Ok(serde_json::from_value(doc)?)
    }

    /// Build a rule set from stored cutoff tuples, assigning
    /// [`DEFAULT_MEDIUM_BAND_WIDTH`] to every record.
    pub fn from_cutoffs(cutoffs: &[ClosingCutoff]) -> Self {
        Self {
            filter_band_width: DEFAULT_FILTER_BAND_WIDTH,
            rules: cutoffs
                .iter()
                .map(|c| PredictionRule::from_cutoff(c, DEFAULT_MEDIUM_BAND_WIDTH))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_band_widths_are_per_record() {
        let rules = RuleSet::sample().rules;
        let widths: Vec<f64> = rules.iter().map(|r| r.medium_band_width).collect();
        assert_eq!(widths, vec![2.2, 2.3, 2.5]);
    }

    #[test]
    fn test_medium_threshold() {
        let rules = RuleSet::sample().rules;
        assert!((rules[0].medium_threshold() - 93.0).abs() < 1e-9);
        assert!((rules[1].medium_threshold() - 92.5).abs() < 1e-9);
        assert!((rules[2].medium_threshold() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_yaml_roundtrip() {
        let yaml = r#"
rules:
  - college_name: Sardar Patel Institute of Technology
    college_code: SPIT
    location: Mumbai
    college_type: Private
    branch_name: Computer Engineering
    degree_type: BE
    closing_percentile: 92.5
    medium_band_width: 2.5
"#;
        let set = RuleSet::from_yaml(yaml).unwrap();
        assert_eq!(set.filter_band_width, DEFAULT_FILTER_BAND_WIDTH);
        assert_eq!(set.rules.len(), 1);
        assert_eq!(set.rules[0].college_code, "SPIT");
    }

    #[test]
    fn test_from_yaml_rejects_invalid_document() {
        let yaml = "rules: []";
        assert!(matches!(
            RuleSet::from_yaml(yaml),
            Err(RuleSetError::Document(_))
        ));
    }

    #[test]
    fn test_from_cutoffs() {
        let cutoffs = vec![ClosingCutoff {
            college_name: "VJTI".into(),
            college_code: "VJTI".into(),
            location: "Mumbai".into(),
            college_type: "Government".into(),
            branch_name: "Computer Engineering".into(),
            degree_type: "BE".into(),
            closing_percentile: 95.2,
        }];
        let set = RuleSet::from_cutoffs(&cutoffs);
        assert_eq!(set.rules.len(), 1);
        assert_eq!(set.rules[0].medium_band_width, DEFAULT_MEDIUM_BAND_WIDTH);
    }
}
