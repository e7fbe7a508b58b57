//! # Postgres Backend
//!
//! SQLx-backed implementation of the access traits. Queries are
//! runtime-bound equality filters — the store's schema is external, so
//! compile-time query checking against a live database is deliberately not
//! used here; the typed contract lives in `cetplan-schema` and decode
//! failures surface as [`StoreError::Decode`].
//!
//! This module carries no unit tests: it needs a live database, and the
//! shared semantics are covered against [`crate::MemoryStore`].

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use cetplan_core::{
    Category, Domicile, Percentile, PredictionId, ProfileId, Timestamp, UserId,
};
use cetplan_schema::{ProfileRow, UserPredictionInsert, UserPredictionRow};

use crate::access::{ClosingCutoff, PredictionStore, ProfileStore, ReferenceStore, SearchDefaults};
use crate::error::StoreError;

/// Postgres store backend over a connection pool. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect a pool to the given database URL.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
            .map_err(map_sqlx)?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProfileStore for PgStore {
    async fn fetch_profile(&self, user_id: &UserId) -> Result<ProfileRow, StoreError> {
        let row = sqlx::query(
            "SELECT id, user_id, full_name, email, percentile, category, domicile, \
             created_at, updated_at FROM profiles WHERE user_id = $1",
        )
        .bind(*user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => decode_profile(&row),
            None => Err(StoreError::NotFound {
                table: "profiles",
                key: user_id.to_string(),
            }),
        }
    }

    async fn update_search_defaults(
        &self,
        user_id: &UserId,
        defaults: &SearchDefaults,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE profiles SET percentile = $2, category = $3, domicile = $4, \
             updated_at = NOW() WHERE user_id = $1",
        )
        .bind(*user_id.as_uuid())
        .bind(defaults.percentile.value())
        .bind(defaults.category.as_str())
        .bind(defaults.domicile.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                table: "profiles",
                key: user_id.to_string(),
            });
        }
        Ok(())
    }
}

impl PredictionStore for PgStore {
    async fn insert_prediction(
        &self,
        insert: UserPredictionInsert,
    ) -> Result<PredictionId, StoreError> {
        let id = insert.id.unwrap_or_default();
        sqlx::query(
            "INSERT INTO user_predictions \
             (id, user_id, percentile, category, domicile, predicted_colleges) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(*id.as_uuid())
        .bind(*insert.user_id.as_uuid())
        .bind(insert.percentile.value())
        .bind(insert.category.as_str())
        .bind(insert.domicile.as_str())
        .bind(insert.predicted_colleges)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(id)
    }

    async fn predictions_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserPredictionRow>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, user_id, percentile, category, domicile, predicted_colleges, \
             created_at FROM user_predictions WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(*user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.iter().map(decode_prediction).collect()
    }
}

impl ReferenceStore for PgStore {
    async fn closing_cutoffs(
        &self,
        category: Category,
        domicile: Domicile,
    ) -> Result<Vec<ClosingCutoff>, StoreError> {
        let rows = sqlx::query(
            "SELECT c.college_name, c.college_code, c.location, \
             COALESCE(c.type, '') AS college_type, \
             b.branch_name, b.degree_type, cu.closing_percentile \
             FROM cutoffs cu \
             JOIN college_branches cb ON cb.id = cu.college_branch_id \
             JOIN colleges c ON c.id = cb.college_id \
             JOIN branches b ON b.id = cb.branch_id \
             WHERE cu.category = $1 AND cu.domicile = $2 \
             ORDER BY cu.closing_percentile DESC",
        )
        .bind(category.as_str())
        .bind(domicile.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.iter().map(decode_cutoff).collect()
    }
}

fn decode_profile(row: &PgRow) -> Result<ProfileRow, StoreError> {
    let percentile = row
        .try_get::<Option<f64>, _>("percentile")
        .map_err(|e| decode_err("profiles", e))?
        .map(Percentile::new)
        .transpose()
        .map_err(|e| decode_err("profiles", e))?;
    let category = row
        .try_get::<Option<String>, _>("category")
        .map_err(|e| decode_err("profiles", e))?
        .map(|s| s.parse::<Category>())
        .transpose()
        .map_err(|e| decode_err("profiles", e))?;
    let domicile = row
        .try_get::<Option<String>, _>("domicile")
        .map_err(|e| decode_err("profiles", e))?
        .map(|s| s.parse::<Domicile>())
        .transpose()
        .map_err(|e| decode_err("profiles", e))?;

    Ok(ProfileRow {
        id: ProfileId(row.try_get("id").map_err(|e| decode_err("profiles", e))?),
        user_id: UserId(row.try_get("user_id").map_err(|e| decode_err("profiles", e))?),
        full_name: row.try_get("full_name").map_err(|e| decode_err("profiles", e))?,
        email: row.try_get("email").map_err(|e| decode_err("profiles", e))?,
        percentile,
        category,
        domicile,
        created_at: timestamp(row, "profiles", "created_at")?,
        updated_at: timestamp(row, "profiles", "updated_at")?,
    })
}

fn decode_prediction(row: &PgRow) -> Result<UserPredictionRow, StoreError> {
    const TABLE: &str = "user_predictions";
    let percentile = Percentile::new(
        row.try_get::<f64, _>("percentile")
            .map_err(|e| decode_err(TABLE, e))?,
    )
    .map_err(|e| decode_err(TABLE, e))?;
    let category = row
        .try_get::<String, _>("category")
        .map_err(|e| decode_err(TABLE, e))?
        .parse::<Category>()
        .map_err(|e| decode_err(TABLE, e))?;
    let domicile = row
        .try_get::<String, _>("domicile")
        .map_err(|e| decode_err(TABLE, e))?
        .parse::<Domicile>()
        .map_err(|e| decode_err(TABLE, e))?;

    Ok(UserPredictionRow {
        id: PredictionId(row.try_get("id").map_err(|e| decode_err(TABLE, e))?),
        user_id: UserId(row.try_get("user_id").map_err(|e| decode_err(TABLE, e))?),
        percentile,
        category,
        domicile,
        predicted_colleges: row
            .try_get::<Option<serde_json::Value>, _>("predicted_colleges")
            .map_err(|e| decode_err(TABLE, e))?,
        created_at: timestamp(row, TABLE, "created_at")?,
    })
}

fn decode_cutoff(row: &PgRow) -> Result<ClosingCutoff, StoreError> {
    const TABLE: &str = "cutoffs";
    Ok(ClosingCutoff {
        college_name: row.try_get("college_name").map_err(|e| decode_err(TABLE, e))?,
        college_code: row.try_get("college_code").map_err(|e| decode_err(TABLE, e))?,
        location: row.try_get("location").map_err(|e| decode_err(TABLE, e))?,
        college_type: row.try_get("college_type").map_err(|e| decode_err(TABLE, e))?,
        branch_name: row.try_get("branch_name").map_err(|e| decode_err(TABLE, e))?,
        degree_type: row.try_get("degree_type").map_err(|e| decode_err(TABLE, e))?,
        closing_percentile: row
            .try_get("closing_percentile")
            .map_err(|e| decode_err(TABLE, e))?,
    })
}

fn timestamp(row: &PgRow, table: &'static str, column: &str) -> Result<Timestamp, StoreError> {
    let dt: DateTime<Utc> = row.try_get(column).map_err(|e| decode_err(table, e))?;
    Ok(Timestamp::from_utc(dt))
}

fn decode_err(table: &'static str, err: impl std::fmt::Display) -> StoreError {
    StoreError::Decode {
        table,
        reason: err.to_string(),
    }
}

/// Map a SQLx error into the store taxonomy. Postgres code `42501` is
/// `insufficient_privilege`, the row-level-security rejection path.
fn map_sqlx(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) => {
            use sqlx::error::ErrorKind;
            match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => StoreError::Constraint(db.message().to_string()),
                _ if db.code().as_deref() == Some("42501") => {
                    StoreError::Permission(db.message().to_string())
                }
                _ => StoreError::Transport(err.to_string()),
            }
        }
        _ => StoreError::Transport(err.to_string()),
    }
}
