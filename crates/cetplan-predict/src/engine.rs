//! # Labeling and Filtering
//!
//! Pure functions from (rule set, percentile) to the labeled, filtered
//! prediction list. No I/O here; the workflow wires these to the store.

use serde::{Deserialize, Serialize};

use cetplan_core::{Percentile, Probability};

use crate::rule::{PredictionRule, RuleSet};

/// One labeled prediction. Serializes with the store's snapshot field
/// names, `type` included, so persisted `predicted_colleges` entries keep
/// the shape the dashboard has always written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegePrediction {
    pub college_name: String,
    pub college_code: String,
    pub location: String,
    #[serde(rename = "type")]
    pub college_type: String,
    pub branch_name: String,
    pub degree_type: String,
    pub closing_percentile: f64,
    pub probability: Probability,
}

/// Label one rule for the submitted percentile.
///
/// `High` at or above the closing percentile, `Medium` within the rule's
/// own band below it, `Low` otherwise.
pub fn label(percentile: Percentile, rule: &PredictionRule) -> Probability {
    let p = percentile.value();
    if p >= rule.closing_percentile {
        Probability::High
    } else if p >= rule.medium_threshold() {
        Probability::Medium
    } else {
        Probability::Low
    }
}

/// Label every rule, then keep only entries within the filter band:
/// `percentile >= closing_percentile - filter_band_width`. Rule order is
/// preserved.
pub fn evaluate(rules: &RuleSet, percentile: Percentile) -> Vec<CollegePrediction> {
    rules
        .rules
        .iter()
        .filter(|rule| percentile.value() >= rule.closing_percentile - rules.filter_band_width)
        .map(|rule| CollegePrediction {
            college_name: rule.college_name.clone(),
            college_code: rule.college_code.clone(),
            location: rule.location.clone(),
            college_type: rule.college_type.clone(),
            branch_name: rule.branch_name.clone(),
            degree_type: rule.degree_type.clone(),
            closing_percentile: rule.closing_percentile,
            probability: label(percentile, rule),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pct(v: f64) -> Percentile {
        Percentile::new(v).unwrap()
    }

    fn rule(closing: f64, band: f64) -> PredictionRule {
        PredictionRule {
            college_name: "Test College".into(),
            college_code: "TC".into(),
            location: "Mumbai".into(),
            college_type: "Government".into(),
            branch_name: "Computer Engineering".into(),
            degree_type: "BE".into(),
            closing_percentile: closing,
            medium_band_width: band,
        }
    }

    #[test]
    fn test_label_at_closing_is_high() {
        assert_eq!(label(pct(95.2), &rule(95.2, 2.2)), Probability::High);
        assert_eq!(label(pct(99.0), &rule(95.2, 2.2)), Probability::High);
    }

    #[test]
    fn test_label_within_band_is_medium() {
        let r = rule(95.2, 2.2);
        // Band is [93.0, 95.2).
        assert_eq!(label(pct(93.0), &r), Probability::Medium);
        assert_eq!(label(pct(95.19), &r), Probability::Medium);
    }

    #[test]
    fn test_label_below_band_is_low() {
        let r = rule(95.2, 2.2);
        assert_eq!(label(pct(92.99), &r), Probability::Low);
        assert_eq!(label(pct(0.0), &r), Probability::Low);
    }

    #[test]
    fn test_filter_boundary() {
        let set = RuleSet {
            filter_band_width: 5.0,
            rules: vec![rule(95.2, 2.2)],
        };
        // Kept at exactly closing - 5.
        assert_eq!(evaluate(&set, pct(90.2)).len(), 1);
        // Dropped just below it.
        assert!(evaluate(&set, pct(90.19)).is_empty());
    }

    #[test]
    fn test_scenario_percentile_96_all_high() {
        let results = evaluate(&RuleSet::sample(), pct(96.0));
        assert_eq!(results.len(), 3);
        assert!(results
            .iter()
            .all(|p| p.probability == Probability::High));
    }

    #[test]
    fn test_scenario_percentile_91_low_low_medium() {
        // 91 >= 90.2 and 89.8: the two Low entries stay visible; 91 is in
        // SPIT's medium band [90.0, 92.5).
        let results = evaluate(&RuleSet::sample(), pct(91.0));
        assert_eq!(results.len(), 3);
        let labels: Vec<Probability> = results.iter().map(|p| p.probability).collect();
        assert_eq!(
            labels,
            vec![Probability::Low, Probability::Low, Probability::Medium]
        );
    }

    #[test]
    fn test_scenario_percentile_89_drops_far_entries() {
        // 89 < 90.2 drops VJTI; 89 < 89.8 drops COEP; SPIT (87.5 floor)
        // stays, in its medium band.
        let results = evaluate(&RuleSet::sample(), pct(89.0));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].college_code, "SPIT");
        assert_eq!(results[0].probability, Probability::Medium);
    }

    #[test]
    fn test_snapshot_serialization_shape() {
        let results = evaluate(&RuleSet::sample(), pct(96.0));
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json[0]["type"], "Government");
        assert_eq!(json[0]["probability"], "High");
        assert!(json[0].get("college_type").is_none());
    }

    proptest! {
        #[test]
        fn prop_label_bands_partition_the_scale(p in 0.0f64..=100.0) {
            let r = rule(92.5, 2.5);
            let got = label(pct(p), &r);
            let expected = if p >= 92.5 {
                Probability::High
            } else if p >= 90.0 {
                Probability::Medium
            } else {
                Probability::Low
            };
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn prop_filter_keeps_iff_within_band(p in 0.0f64..=100.0) {
            let set = RuleSet {
                filter_band_width: 5.0,
                rules: vec![rule(92.5, 2.5)],
            };
            let kept = !evaluate(&set, pct(p)).is_empty();
            prop_assert_eq!(kept, p >= 87.5);
        }

        #[test]
        fn prop_filtered_out_entries_would_be_low(p in 0.0f64..=100.0) {
            // The filter band is wider than every sample medium band, so a
            // dropped entry is always one that would have been labeled Low.
            let set = RuleSet::sample();
            for r in &set.rules {
                if p < r.closing_percentile - set.filter_band_width {
                    prop_assert_eq!(label(pct(p), r), Probability::Low);
                }
            }
        }
    }
}
