//! # Access Traits
//!
//! The operations the rest of the workspace may issue against the store,
//! as traits so the prediction workflow can be exercised against the
//! in-memory backend in tests and against Postgres in production.
//!
//! Futures are declared `Send` in the trait signatures so handlers built on
//! these traits stay spawnable on a multi-threaded runtime.

use std::future::Future;

use cetplan_core::{Category, Domicile, Percentile, UserId};
use cetplan_schema::{ProfileRow, UserPredictionInsert, UserPredictionRow};
use serde::{Deserialize, Serialize};

/// The three admission-search defaults written back to a profile on every
/// search submission.
///
/// No validation happens at this layer — the workflow validates before it
/// ever constructs one of these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchDefaults {
    pub percentile: Percentile,
    pub category: Category,
    pub domicile: Domicile,
}

/// One closing-percentile reference tuple, joined across
/// `cutoffs`/`college_branches`/`colleges`/`branches`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosingCutoff {
    pub college_name: String,
    pub college_code: String,
    pub location: String,
    pub college_type: String,
    pub branch_name: String,
    pub degree_type: String,
    /// Lowest admitted percentile in the reference round.
    pub closing_percentile: f64,
}

/// Fetch/update the single profile row keyed by user identity.
pub trait ProfileStore: Send + Sync {
    /// Read exactly one row where `user_id` matches.
    ///
    /// # Errors
    ///
    /// [`crate::StoreError::NotFound`] if zero rows match — callers treat
    /// this as "no profile yet". Transport or permission failures
    /// otherwise.
    fn fetch_profile(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<ProfileRow, crate::StoreError>> + Send;

    /// Write the three search-default fields on the matching row.
    ///
    /// No retry, no rollback; the caller decides what a failure means.
    fn update_search_defaults(
        &self,
        user_id: &UserId,
        defaults: &SearchDefaults,
    ) -> impl Future<Output = Result<(), crate::StoreError>> + Send;
}

/// Append-only prediction records.
pub trait PredictionStore: Send + Sync {
    /// Insert one prediction record. There is intentionally no idempotency
    /// key: a resubmission with identical input creates a second row.
    fn insert_prediction(
        &self,
        insert: UserPredictionInsert,
    ) -> impl Future<Output = Result<cetplan_core::PredictionId, crate::StoreError>> + Send;

    /// All prediction records for a user, most recent first.
    fn predictions_for_user(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<UserPredictionRow>, crate::StoreError>> + Send;
}

/// Read-only reference data.
pub trait ReferenceStore: Send + Sync {
    /// Closing cutoffs for a category/domicile pair, one tuple per
    /// college/branch offering. Feeds rule-set construction once real
    /// cutoff data replaces the built-in sample set.
    fn closing_cutoffs(
        &self,
        category: Category,
        domicile: Domicile,
    ) -> impl Future<Output = Result<Vec<ClosingCutoff>, crate::StoreError>> + Send;
}
