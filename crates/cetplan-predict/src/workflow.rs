//! # Submission Orchestration
//!
//! Wires the pure engine to the store and notification boundaries. The
//! ordering contract: profile update is issued before computation, which is
//! issued before the prediction insert, each awaited sequentially — but the
//! later steps never condition on the earlier writes succeeding. Only
//! validation stops the flow, and it stops it before any write.

use cetplan_core::{Category, Domicile, Percentile, UserId};
use cetplan_schema::{ProfileRow, UserPredictionInsert};
use cetplan_store::{PredictionStore, ProfileStore, SearchDefaults};

use crate::engine::{evaluate, CollegePrediction};
use crate::notify::{Notification, Notifier};
use crate::rule::RuleSet;

/// Raw form fields as submitted. Kept as strings: the form boundary is
/// untyped, and distinguishing "empty" from "unparseable" is part of the
/// validation step's job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchInput {
    pub percentile: String,
    pub category: String,
    pub domicile: String,
}

/// Result of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Validation failed; nothing was written.
    Rejected,
    /// The flow ran to completion. Store writes along the way may still
    /// have failed individually — that is not reflected here.
    Completed {
        predictions: Vec<CollegePrediction>,
    },
}

impl SubmissionOutcome {
    /// The computed predictions, empty when rejected.
    pub fn predictions(&self) -> &[CollegePrediction] {
        match self {
            Self::Rejected => &[],
            Self::Completed { predictions } => predictions,
        }
    }
}

/// Pre-fill form fields from a fetched profile, mirroring what the
/// dashboard does after `fetch_profile`: defaults populate only when all
/// three are present.
pub fn search_defaults_from_profile(profile: &ProfileRow) -> Option<SearchInput> {
    match (profile.percentile, profile.category, profile.domicile) {
        (Some(percentile), Some(category), Some(domicile)) => Some(SearchInput {
            percentile: percentile.to_string(),
            category: category.as_str().to_string(),
            domicile: domicile.as_str().to_string(),
        }),
        _ => None,
    }
}

/// The prediction workflow: injected rule set, store, and notifier.
#[derive(Debug, Clone)]
pub struct PredictionWorkflow<S, N> {
    store: S,
    notifier: N,
    rules: RuleSet,
}

impl<S, N> PredictionWorkflow<S, N>
where
    S: ProfileStore + PredictionStore,
    N: Notifier,
{
    pub fn new(store: S, notifier: N, rules: RuleSet) -> Self {
        Self {
            store,
            notifier,
            rules,
        }
    }

    /// The configured rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run one submission end to end.
    pub async fn submit(&self, user_id: &UserId, input: &SearchInput) -> SubmissionOutcome {
        // Step 1: validate. Terminates before any write.
        let Some((percentile, category, domicile)) = self.validate(input) else {
            metrics::counter!("cetplan_submissions_rejected_total").increment(1);
            return SubmissionOutcome::Rejected;
        };

        // Step 2: persist profile defaults. Surfaced on failure, but the
        // search proceeds regardless of the outcome.
        let defaults = SearchDefaults {
            percentile,
            category,
            domicile,
        };
        if let Err(err) = self.store.update_search_defaults(user_id, &defaults).await {
            tracing::warn!(%user_id, error = %err, "profile update failed");
            metrics::counter!("cetplan_profile_update_failures_total").increment(1);
            self.notifier
                .notify(Notification::error("Error", "Failed to update profile"));
        }

        // Step 3: compute and filter.
        let predictions = evaluate(&self.rules, percentile);

        // Step 4: persist the prediction record, fire-and-forget. The
        // in-memory result stands whether or not this lands.
        let snapshot = match serde_json::to_value(&predictions) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(error = %err, "prediction snapshot serialization failed");
                None
            }
        };
        let insert = UserPredictionInsert {
            id: None,
            user_id: *user_id,
            percentile,
            category,
            domicile,
            predicted_colleges: snapshot,
            created_at: None,
        };
        if let Err(err) = self.store.insert_prediction(insert).await {
            tracing::warn!(%user_id, error = %err, "prediction record insert failed");
            metrics::counter!("cetplan_prediction_insert_failures_total").increment(1);
        }

        // Step 5: report.
        metrics::counter!("cetplan_submissions_completed_total").increment(1);
        self.notifier.notify(Notification::info(
            "Search Complete",
            format!(
                "Found {} matching colleges for your profile.",
                predictions.len()
            ),
        ));

        SubmissionOutcome::Completed { predictions }
    }

    /// Require all three fields, then parse them. Any failure notifies and
    /// rejects the submission.
    fn validate(&self, input: &SearchInput) -> Option<(Percentile, Category, Domicile)> {
        if input.percentile.trim().is_empty()
            || input.category.trim().is_empty()
            || input.domicile.trim().is_empty()
        {
            self.notifier.notify(Notification::error(
                "Missing Information",
                "Please fill in all fields to search for colleges.",
            ));
            return None;
        }

        let percentile = match Percentile::parse(&input.percentile) {
            Ok(p) => p,
            Err(err) => {
                self.notifier
                    .notify(Notification::error("Invalid Input", err.to_string()));
                return None;
            }
        };
        let category = match input.category.parse::<Category>() {
            Ok(c) => c,
            Err(err) => {
                self.notifier
                    .notify(Notification::error("Invalid Input", err.to_string()));
                return None;
            }
        };
        let domicile = match input.domicile.parse::<Domicile>() {
            Ok(d) => d,
            Err(err) => {
                self.notifier
                    .notify(Notification::error("Invalid Input", err.to_string()));
                return None;
            }
        };

        Some((percentile, category, domicile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NotificationLog, Severity};
    use cetplan_core::{ProfileId, Timestamp};
    use cetplan_store::MemoryStore;

    async fn seeded_store(user_id: UserId) -> MemoryStore {
        let store = MemoryStore::new();
        store
            .seed_profile(ProfileRow {
                id: ProfileId::new(),
                user_id,
                full_name: "Asha Kulkarni".into(),
                email: "asha@example.com".into(),
                percentile: None,
                category: None,
                domicile: None,
                created_at: Timestamp::now(),
                updated_at: Timestamp::now(),
            })
            .await;
        store
    }

    fn workflow(store: MemoryStore) -> (PredictionWorkflow<MemoryStore, NotificationLog>, NotificationLog) {
        let log = NotificationLog::new();
        (
            PredictionWorkflow::new(store, log.clone(), RuleSet::sample()),
            log,
        )
    }

    fn input(percentile: &str, category: &str, domicile: &str) -> SearchInput {
        SearchInput {
            percentile: percentile.into(),
            category: category.into(),
            domicile: domicile.into(),
        }
    }

    #[tokio::test]
    async fn test_missing_field_rejects_with_zero_writes() {
        let user = UserId::new();
        let store = seeded_store(user).await;
        let (wf, log) = workflow(store.clone());

        let outcome = wf.submit(&user, &input("", "OPEN", "Maharashtra")).await;
        assert_eq!(outcome, SubmissionOutcome::Rejected);
        assert!(outcome.predictions().is_empty());

        // No store writes at all.
        assert_eq!(store.prediction_count().await, 0);
        let row = store.fetch_profile(&user).await.unwrap();
        assert!(row.percentile.is_none());

        let notes = log.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Missing Information");
        assert_eq!(notes[0].severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_unparseable_percentile_rejects_with_zero_writes() {
        let user = UserId::new();
        let store = seeded_store(user).await;
        let (wf, log) = workflow(store.clone());

        let outcome = wf
            .submit(&user, &input("ninety-six", "OPEN", "Maharashtra"))
            .await;
        assert_eq!(outcome, SubmissionOutcome::Rejected);
        assert_eq!(store.prediction_count().await, 0);
        assert_eq!(log.drain()[0].title, "Invalid Input");
    }

    #[tokio::test]
    async fn test_successful_submission_writes_profile_and_record() {
        let user = UserId::new();
        let store = seeded_store(user).await;
        let (wf, log) = workflow(store.clone());

        let outcome = wf.submit(&user, &input("96", "OPEN", "Maharashtra")).await;
        assert_eq!(outcome.predictions().len(), 3);

        // Profile defaults persisted.
        let row = store.fetch_profile(&user).await.unwrap();
        assert_eq!(row.percentile.unwrap().value(), 96.0);
        assert_eq!(row.category, Some(Category::Open));
        assert_eq!(row.domicile, Some(Domicile::Maharashtra));

        // One prediction row with the snapshot.
        let rows = store.prediction_rows().await;
        assert_eq!(rows.len(), 1);
        let snapshot = rows[0].predicted_colleges.as_ref().unwrap();
        assert_eq!(snapshot.as_array().unwrap().len(), 3);
        assert_eq!(snapshot[0]["probability"], "High");

        let notes = log.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Search Complete");
        assert!(notes[0].description.contains("Found 3"));
    }

    #[tokio::test]
    async fn test_resubmission_duplicates_prediction_rows() {
        // Current behavior, not a defect to fix here: there is no
        // idempotency key, so identical submissions append identical rows.
        let user = UserId::new();
        let store = seeded_store(user).await;
        let (wf, _log) = workflow(store.clone());

        wf.submit(&user, &input("96", "OPEN", "Maharashtra")).await;
        wf.submit(&user, &input("96", "OPEN", "Maharashtra")).await;

        let rows = store.prediction_rows().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].percentile, rows[1].percentile);
        assert_ne!(rows[0].id, rows[1].id);
    }

    #[tokio::test]
    async fn test_missing_profile_does_not_block_search() {
        // No profile row seeded: the update fails with NotFound, the
        // search still completes and the record still lands.
        let store = MemoryStore::new();
        let (wf, log) = workflow(store.clone());
        let user = UserId::new();

        let outcome = wf.submit(&user, &input("91", "OBC", "Maharashtra")).await;
        assert_eq!(outcome.predictions().len(), 3);
        assert_eq!(store.prediction_count().await, 1);

        let notes = log.drain();
        assert_eq!(notes[0].title, "Error");
        assert_eq!(notes[1].title, "Search Complete");
    }

    #[tokio::test]
    async fn test_write_failures_do_not_lose_in_memory_result() {
        let user = UserId::new();
        let store = seeded_store(user).await;
        store.set_fail_writes(true).await;
        let (wf, log) = workflow(store.clone());

        let outcome = wf.submit(&user, &input("96", "OPEN", "Maharashtra")).await;

        // Both writes failed, but the computed list and the completion
        // report survive.
        assert_eq!(outcome.predictions().len(), 3);
        assert_eq!(store.prediction_count().await, 0);
        let notes = log.drain();
        assert_eq!(notes.last().unwrap().title, "Search Complete");
    }

    #[tokio::test]
    async fn test_scenario_91_labels_in_snapshot() {
        let user = UserId::new();
        let store = seeded_store(user).await;
        let (wf, _log) = workflow(store.clone());

        wf.submit(&user, &input("91", "OPEN", "Maharashtra")).await;
        let rows = store.prediction_rows().await;
        let snapshot = rows[0].predicted_colleges.as_ref().unwrap();
        let labels: Vec<&str> = snapshot
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["probability"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["Low", "Low", "Medium"]);
    }

    #[test]
    fn test_search_defaults_require_all_three_fields() {
        let mut row = ProfileRow {
            id: ProfileId::new(),
            user_id: UserId::new(),
            full_name: "Asha Kulkarni".into(),
            email: "asha@example.com".into(),
            percentile: Some(Percentile::new(94.5).unwrap()),
            category: Some(Category::Obc),
            domicile: None,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        };
        assert!(search_defaults_from_profile(&row).is_none());

        row.domicile = Some(Domicile::Maharashtra);
        let defaults = search_defaults_from_profile(&row).unwrap();
        assert_eq!(defaults.percentile, "94.5");
        assert_eq!(defaults.category, "OBC");
        assert_eq!(defaults.domicile, "Maharashtra");
    }
}
