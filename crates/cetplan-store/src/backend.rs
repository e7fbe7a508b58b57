//! # Backend Selection
//!
//! One concrete type the API layer can hold regardless of which backend is
//! configured. An enum rather than a trait object because the access traits
//! return `impl Future` and are not object safe; the match-per-call cost is
//! two arms.

use cetplan_core::{Category, Domicile, PredictionId, UserId};
use cetplan_schema::{ProfileRow, UserPredictionInsert, UserPredictionRow};

use crate::access::{ClosingCutoff, PredictionStore, ProfileStore, ReferenceStore, SearchDefaults};
use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::postgres::PgStore;

/// The configured store backend.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// In-process maps; no persistence across restarts.
    Memory(MemoryStore),
    /// Postgres via SQLx.
    Postgres(PgStore),
}

impl StoreBackend {
    /// Connect a Postgres backend.
    pub async fn postgres(url: &str) -> Result<Self, StoreError> {
        Ok(Self::Postgres(PgStore::connect(url).await?))
    }

    /// In-memory backend.
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }
}

impl From<MemoryStore> for StoreBackend {
    fn from(store: MemoryStore) -> Self {
        Self::Memory(store)
    }
}

impl From<PgStore> for StoreBackend {
    fn from(store: PgStore) -> Self {
        Self::Postgres(store)
    }
}

impl ProfileStore for StoreBackend {
    async fn fetch_profile(&self, user_id: &UserId) -> Result<ProfileRow, StoreError> {
        match self {
            Self::Memory(store) => store.fetch_profile(user_id).await,
            Self::Postgres(store) => store.fetch_profile(user_id).await,
        }
    }

    async fn update_search_defaults(
        &self,
        user_id: &UserId,
        defaults: &SearchDefaults,
    ) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.update_search_defaults(user_id, defaults).await,
            Self::Postgres(store) => store.update_search_defaults(user_id, defaults).await,
        }
    }
}

impl PredictionStore for StoreBackend {
    async fn insert_prediction(
        &self,
        insert: UserPredictionInsert,
    ) -> Result<PredictionId, StoreError> {
        match self {
            Self::Memory(store) => store.insert_prediction(insert).await,
            Self::Postgres(store) => store.insert_prediction(insert).await,
        }
    }

    async fn predictions_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserPredictionRow>, StoreError> {
        match self {
            Self::Memory(store) => store.predictions_for_user(user_id).await,
            Self::Postgres(store) => store.predictions_for_user(user_id).await,
        }
    }
}

impl ReferenceStore for StoreBackend {
    async fn closing_cutoffs(
        &self,
        category: Category,
        domicile: Domicile,
    ) -> Result<Vec<ClosingCutoff>, StoreError> {
        match self {
            Self::Memory(store) => store.closing_cutoffs(category, domicile).await,
            Self::Postgres(store) => store.closing_cutoffs(category, domicile).await,
        }
    }
}
