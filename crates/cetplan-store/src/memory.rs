//! # In-Memory Backend
//!
//! A map-backed store used by the workflow tests and by `cetplan serve`
//! when no database is configured. Semantics mirror the Postgres backend:
//! `fetch_profile` on a missing row is `NotFound`, updates touch
//! `updated_at`, prediction inserts append and never overwrite.
//!
//! Write failures can be injected with [`MemoryStore::set_fail_writes`] to
//! exercise the workflow's fire-and-forget paths without a real transport.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use cetplan_core::{Category, Domicile, PredictionId, Timestamp, UserId};
use cetplan_schema::{ProfileRow, UserPredictionInsert, UserPredictionRow};

use crate::access::{ClosingCutoff, PredictionStore, ProfileStore, ReferenceStore, SearchDefaults};
use crate::error::StoreError;

#[derive(Debug, Default)]
struct MemoryInner {
    profiles: HashMap<UserId, ProfileRow>,
    predictions: Vec<UserPredictionRow>,
    cutoffs: Vec<(Category, Domicile, ClosingCutoff)>,
    fail_writes: bool,
}

/// In-process store backend. Cloning shares the underlying maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a profile row, as the external store's signup trigger would.
    pub async fn seed_profile(&self, row: ProfileRow) {
        let mut inner = self.inner.write().await;
        inner.profiles.insert(row.user_id, row);
    }

    /// Seed a closing-cutoff reference tuple.
    pub async fn seed_cutoff(&self, category: Category, domicile: Domicile, cutoff: ClosingCutoff) {
        let mut inner = self.inner.write().await;
        inner.cutoffs.push((category, domicile, cutoff));
    }

    /// When set, every write returns a transport error. Reads are
    /// unaffected.
    pub async fn set_fail_writes(&self, fail: bool) {
        self.inner.write().await.fail_writes = fail;
    }

    /// Number of stored prediction rows, for assertions.
    pub async fn prediction_count(&self) -> usize {
        self.inner.read().await.predictions.len()
    }

    /// Snapshot of all stored prediction rows, insertion order.
    pub async fn prediction_rows(&self) -> Vec<UserPredictionRow> {
        self.inner.read().await.predictions.clone()
    }

    async fn check_writable(&self) -> Result<(), StoreError> {
        if self.inner.read().await.fail_writes {
            Err(StoreError::Transport("injected write failure".into()))
        } else {
            Ok(())
        }
    }
}

impl ProfileStore for MemoryStore {
    async fn fetch_profile(&self, user_id: &UserId) -> Result<ProfileRow, StoreError> {
        let inner = self.inner.read().await;
        inner
            .profiles
            .get(user_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                table: "profiles",
                key: user_id.to_string(),
            })
    }

    async fn update_search_defaults(
        &self,
        user_id: &UserId,
        defaults: &SearchDefaults,
    ) -> Result<(), StoreError> {
        self.check_writable().await?;
        let mut inner = self.inner.write().await;
        let row = inner
            .profiles
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound {
                table: "profiles",
                key: user_id.to_string(),
            })?;
        row.percentile = Some(defaults.percentile);
        row.category = Some(defaults.category);
        row.domicile = Some(defaults.domicile);
        row.updated_at = Timestamp::now();
        Ok(())
    }
}

impl PredictionStore for MemoryStore {
    async fn insert_prediction(
        &self,
        insert: UserPredictionInsert,
    ) -> Result<PredictionId, StoreError> {
        self.check_writable().await?;
        let id = insert.id.unwrap_or_default();
        let row = UserPredictionRow {
            id,
            user_id: insert.user_id,
            percentile: insert.percentile,
            category: insert.category,
            domicile: insert.domicile,
            predicted_colleges: insert.predicted_colleges,
            created_at: insert.created_at.unwrap_or_else(Timestamp::now),
        };
        self.inner.write().await.predictions.push(row);
        Ok(id)
    }

    async fn predictions_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserPredictionRow>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows: Vec<UserPredictionRow> = inner
            .predictions
            .iter()
            .filter(|row| &row.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

impl ReferenceStore for MemoryStore {
    async fn closing_cutoffs(
        &self,
        category: Category,
        domicile: Domicile,
    ) -> Result<Vec<ClosingCutoff>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .cutoffs
            .iter()
            .filter(|(c, d, _)| *c == category && *d == domicile)
            .map(|(_, _, cutoff)| cutoff.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cetplan_core::{Percentile, ProfileId};

    fn profile(user_id: UserId) -> ProfileRow {
        ProfileRow {
            id: ProfileId::new(),
            user_id,
            full_name: "Asha Kulkarni".into(),
            email: "asha@example.com".into(),
            percentile: None,
            category: None,
            domicile: None,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn test_fetch_missing_profile_is_not_found() {
        let store = MemoryStore::new();
        let err = store.fetch_profile(&UserId::new()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_then_fetch_sees_defaults() {
        let store = MemoryStore::new();
        let user = UserId::new();
        store.seed_profile(profile(user)).await;

        let defaults = SearchDefaults {
            percentile: Percentile::new(96.0).unwrap(),
            category: Category::Open,
            domicile: Domicile::Maharashtra,
        };
        store.update_search_defaults(&user, &defaults).await.unwrap();

        let row = store.fetch_profile(&user).await.unwrap();
        assert_eq!(row.percentile, Some(defaults.percentile));
        assert_eq!(row.category, Some(Category::Open));
        assert_eq!(row.domicile, Some(Domicile::Maharashtra));
    }

    #[tokio::test]
    async fn test_update_missing_profile_is_not_found() {
        let store = MemoryStore::new();
        let defaults = SearchDefaults {
            percentile: Percentile::new(90.0).unwrap(),
            category: Category::Obc,
            domicile: Domicile::Maharashtra,
        };
        let err = store
            .update_search_defaults(&UserId::new(), &defaults)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_prediction_inserts_append() {
        let store = MemoryStore::new();
        let user = UserId::new();
        let insert = UserPredictionInsert {
            id: None,
            user_id: user,
            percentile: Percentile::new(91.0).unwrap(),
            category: Category::Open,
            domicile: Domicile::Maharashtra,
            predicted_colleges: None,
            created_at: None,
        };
        store.insert_prediction(insert.clone()).await.unwrap();
        store.insert_prediction(insert).await.unwrap();
        assert_eq!(store.prediction_count().await, 2);

        let rows = store.predictions_for_user(&user).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_injected_write_failure_is_transport() {
        let store = MemoryStore::new();
        let user = UserId::new();
        store.seed_profile(profile(user)).await;
        store.set_fail_writes(true).await;

        let defaults = SearchDefaults {
            percentile: Percentile::new(90.0).unwrap(),
            category: Category::Open,
            domicile: Domicile::Maharashtra,
        };
        let err = store
            .update_search_defaults(&user, &defaults)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
        // Reads still work.
        assert!(store.fetch_profile(&user).await.is_ok());
    }

    #[tokio::test]
    async fn test_cutoffs_filtered_by_category_and_domicile() {
        let store = MemoryStore::new();
        let cutoff = ClosingCutoff {
            college_name: "VJTI".into(),
            college_code: "VJTI".into(),
            location: "Mumbai".into(),
            college_type: "Government".into(),
            branch_name: "Computer Engineering".into(),
            degree_type: "BE".into(),
            closing_percentile: 95.2,
        };
        store
            .seed_cutoff(Category::Open, Domicile::Maharashtra, cutoff.clone())
            .await;

        let hits = store
            .closing_cutoffs(Category::Open, Domicile::Maharashtra)
            .await
            .unwrap();
        assert_eq!(hits, vec![cutoff]);

        let misses = store
            .closing_cutoffs(Category::Sc, Domicile::Maharashtra)
            .await
            .unwrap();
        assert!(misses.is_empty());
    }
}
