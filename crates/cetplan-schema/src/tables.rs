//! # Table Shapes
//!
//! Row, insert, and update shapes for the six external tables. Field names
//! match the store's column names exactly; serde derives make each struct
//! the wire contract for the corresponding `select`/`insert`/`update`.
//!
//! `colleges`, `branches`, `college_branches`, and `cutoffs` are reference
//! data: this system reads them and never writes. Their insert/update
//! shapes are declared anyway so the contract covers all three operations
//! per table, mirroring the generated client the store exposes.

use serde::{Deserialize, Serialize};

use cetplan_core::{
    BranchId, Category, CollegeBranchId, CollegeId, CutoffId, Domicile, Percentile, PredictionId,
    ProfileId, Timestamp, UserId,
};

// ─── profiles ────────────────────────────────────────────────────────

/// Read shape of a `profiles` row.
///
/// One row per authenticated user (`user_id` is unique). Created implicitly
/// at signup by the store's trigger; mutated by the prediction workflow;
/// never deleted by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    /// Primary key.
    pub id: ProfileId,
    /// Owning user; unique and stable for the session.
    pub user_id: UserId,
    /// Display name captured at signup.
    pub full_name: String,
    /// Email captured at signup.
    pub email: String,
    /// Admission-search default: last submitted percentile.
    pub percentile: Option<Percentile>,
    /// Admission-search default: last submitted category.
    pub category: Option<Category>,
    /// Admission-search default: last submitted domicile.
    pub domicile: Option<Domicile>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert shape for `profiles`. Server-defaulted columns are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProfileId>,
    pub user_id: UserId,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<Percentile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domicile: Option<Domicile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Update shape for `profiles`. Every field is optional; absent fields are
/// left untouched by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<Percentile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domicile: Option<Domicile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

// ─── user_predictions ────────────────────────────────────────────────

/// Read shape of a `user_predictions` row.
///
/// Append-only: one row per search submission, no update or delete path.
/// `predicted_colleges` is an opaque serialized snapshot of the computed
/// result list — arbitrary nested JSON, not type-constrained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPredictionRow {
    /// Primary key.
    pub id: PredictionId,
    /// Owning user.
    pub user_id: UserId,
    /// Percentile submitted with this search.
    pub percentile: Percentile,
    /// Category submitted with this search.
    pub category: Category,
    /// Domicile submitted with this search.
    pub domicile: Domicile,
    /// Opaque snapshot of the filtered result list at submission time.
    pub predicted_colleges: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// Insert shape for `user_predictions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPredictionInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PredictionId>,
    pub user_id: UserId,
    pub percentile: Percentile,
    pub category: Category,
    pub domicile: Domicile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_colleges: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Update shape for `user_predictions`. The table is append-only from this
/// system's side; the shape exists to complete the contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPredictionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<Percentile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domicile: Option<Domicile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_colleges: Option<serde_json::Value>,
}

// ─── colleges (read-only reference data) ─────────────────────────────

/// Read shape of a `colleges` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeRow {
    pub id: CollegeId,
    /// Short code, e.g. `VJTI`, `COEP`.
    pub college_code: String,
    pub college_name: String,
    pub location: String,
    /// Institution type, e.g. `Government`, `Private`.
    #[serde(rename = "type")]
    pub college_type: Option<String>,
    pub university_name: Option<String>,
    pub autonomy_status: Option<String>,
    pub established_year: Option<i32>,
    pub website_url: Option<String>,
    pub created_at: Timestamp,
}

/// Insert shape for `colleges` (declared for contract completeness; this
/// system has no write path to reference data).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CollegeId>,
    pub college_code: String,
    pub college_name: String,
    pub location: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub college_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autonomy_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub established_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Update shape for `colleges`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollegeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub college_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autonomy_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub established_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

// ─── branches (read-only reference data) ─────────────────────────────

/// Read shape of a `branches` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRow {
    pub id: BranchId,
    pub branch_code: String,
    pub branch_name: String,
    /// Degree awarded, e.g. `BE`.
    pub degree_type: String,
    /// Course duration in years.
    pub duration: i32,
    pub created_at: Timestamp,
}

/// Insert shape for `branches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BranchId>,
    pub branch_code: String,
    pub branch_name: String,
    pub degree_type: String,
    pub duration: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Update shape for `branches`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
}

// ─── college_branches (read-only reference data) ─────────────────────

/// Read shape of a `college_branches` row: one branch offered at one
/// college. `College 1—N CollegeBranch N—1 Branch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeBranchRow {
    pub id: CollegeBranchId,
    pub college_id: CollegeId,
    pub branch_id: BranchId,
    pub intake_capacity: Option<i32>,
    pub fees_per_year: Option<f64>,
    pub created_at: Timestamp,
}

/// Insert shape for `college_branches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeBranchInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CollegeBranchId>,
    pub college_id: CollegeId,
    pub branch_id: BranchId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees_per_year: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Update shape for `college_branches`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollegeBranchUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_id: Option<CollegeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<BranchId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees_per_year: Option<f64>,
}

// ─── cutoffs (read-only reference data) ──────────────────────────────

/// Read shape of a `cutoffs` row: historical admission percentile band for
/// one college/branch offering in one counseling round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutoffRow {
    pub id: CutoffId,
    pub college_branch_id: CollegeBranchId,
    pub category: Category,
    pub domicile: Domicile,
    pub gender: Option<String>,
    /// Highest admitted percentile in the round.
    pub opening_percentile: f64,
    /// Lowest admitted percentile in the round.
    pub closing_percentile: f64,
    pub round_number: i32,
    pub year: i32,
    pub created_at: Timestamp,
}

/// Insert shape for `cutoffs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutoffInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CutoffId>,
    pub college_branch_id: CollegeBranchId,
    pub category: Category,
    pub domicile: Domicile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub opening_percentile: f64,
    pub closing_percentile: f64,
    pub round_number: i32,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Update shape for `cutoffs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CutoffUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_branch_id: Option<CollegeBranchId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domicile: Option<Domicile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_percentile: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_percentile: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}
