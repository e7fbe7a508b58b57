//! # Response View Models
//!
//! Shapes the domain types into the JSON the dashboard renders, including
//! the probability color classes. Stored snapshots are treated as opaque
//! JSON: entries are read leniently, and an unrecognized probability label
//! falls back to the neutral gray styling rather than failing the request.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use cetplan_core::{Category, Domicile, Probability};
use cetplan_predict::{CollegePrediction, SearchInput};
use cetplan_schema::UserPredictionRow;

/// CSS color class for a probability label. Unknown labels — old
/// snapshots, hand-edited rows — render gray instead of erroring.
pub fn probability_color_class(label: &str) -> &'static str {
    match Probability::from_label(label) {
        Some(Probability::High) => "green",
        Some(Probability::Medium) => "yellow",
        Some(Probability::Low) => "red",
        None => "gray",
    }
}

/// One freshly computed prediction, with its color class attached.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PredictionView {
    pub college_name: String,
    pub college_code: String,
    pub location: String,
    #[serde(rename = "type")]
    pub college_type: String,
    pub branch_name: String,
    pub degree_type: String,
    pub closing_percentile: f64,
    /// `High`, `Medium`, or `Low`.
    #[schema(value_type = String)]
    pub probability: Probability,
    #[schema(value_type = String)]
    pub color_class: &'static str,
}

impl From<&CollegePrediction> for PredictionView {
    fn from(prediction: &CollegePrediction) -> Self {
        Self {
            college_name: prediction.college_name.clone(),
            college_code: prediction.college_code.clone(),
            location: prediction.location.clone(),
            college_type: prediction.college_type.clone(),
            branch_name: prediction.branch_name.clone(),
            degree_type: prediction.degree_type.clone(),
            closing_percentile: prediction.closing_percentile,
            probability: prediction.probability,
            color_class: probability_color_class(prediction.probability.as_str()),
        }
    }
}

/// One entry of a stored `predicted_colleges` snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SnapshotEntryView {
    pub college_name: String,
    pub branch_name: String,
    pub probability: String,
    #[schema(value_type = String)]
    pub color_class: &'static str,
}

/// Read a stored snapshot leniently. Entries that are not objects are
/// skipped; missing fields render empty.
pub fn snapshot_views(snapshot: Option<&Value>) -> Vec<SnapshotEntryView> {
    let Some(entries) = snapshot.and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| {
            let field = |name: &str| {
                entry
                    .get(name)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            let probability = field("probability");
            let color_class = probability_color_class(&probability);
            SnapshotEntryView {
                college_name: field("college_name"),
                branch_name: field("branch_name"),
                probability,
                color_class,
            }
        })
        .collect()
}

/// One prediction record from the history listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PredictionRecordView {
    pub id: String,
    pub percentile: f64,
    #[schema(value_type = String)]
    pub category: Category,
    #[schema(value_type = String)]
    pub domicile: Domicile,
    pub predicted_colleges: Vec<SnapshotEntryView>,
    pub created_at: String,
}

impl From<&UserPredictionRow> for PredictionRecordView {
    fn from(row: &UserPredictionRow) -> Self {
        Self {
            id: row.id.as_uuid().to_string(),
            percentile: row.percentile.value(),
            category: row.category,
            domicile: row.domicile,
            predicted_colleges: snapshot_views(row.predicted_colleges.as_ref()),
            created_at: row.created_at.to_iso8601(),
        }
    }
}

/// Search-form pre-fill values, as strings the form can render directly.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SearchFormView {
    pub percentile: String,
    pub category: String,
    pub domicile: String,
}

impl From<SearchInput> for SearchFormView {
    fn from(input: SearchInput) -> Self {
        Self {
            percentile: input.percentile,
            category: input.category,
            domicile: input.domicile,
        }
    }
}
