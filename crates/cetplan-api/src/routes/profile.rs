//! # Profile Routes
//!
//! Routes:
//! - GET /v1/profile — the signed-in user's profile plus search-form
//!   pre-fill values
//! - PUT /v1/profile — update the three search defaults directly
//!
//! A missing profile row is not an error: the trigger that creates rows
//! lives in the external store, and a freshly signed-up user may race it.
//! The fetch returns an empty body instead of a 404.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use cetplan_auth::IdentityProvider;
use cetplan_core::{Category, Domicile, Percentile};
use cetplan_predict::search_defaults_from_profile;
use cetplan_schema::ProfileRow;
use cetplan_store::{ProfileStore, SearchDefaults};

use crate::error::AppError;
use crate::state::AppState;
use crate::view::SearchFormView;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    /// The profile row as stored, or null when none exists yet.
    #[schema(value_type = Option<Object>)]
    pub profile: Option<ProfileRow>,
    /// Present only when the profile has all three defaults on record.
    pub search_defaults: Option<SearchFormView>,
}

#[utoipa::path(
    get,
    path = "/v1/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Profile and search-form pre-fill values", body = ProfileResponse),
        (status = 401, description = "No signed-in session")
    )
)]
pub async fn fetch<P: IdentityProvider + 'static>(
    State(state): State<AppState<P>>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user_id = state.require_user()?;
    match state.store.fetch_profile(&user_id).await {
        Ok(row) => {
            let search_defaults = search_defaults_from_profile(&row).map(SearchFormView::from);
            Ok(Json(ProfileResponse {
                profile: Some(row),
                search_defaults,
            }))
        }
        Err(err) if err.is_not_found() => {
            tracing::debug!(%user_id, "no profile row yet");
            Ok(Json(ProfileResponse {
                profile: None,
                search_defaults: None,
            }))
        }
        Err(err) => Err(err.into()),
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub percentile: f64,
    /// Category wire string, e.g. `OPEN`, `OBC`.
    #[schema(value_type = String)]
    pub category: Category,
    /// `Maharashtra` or `Outside Maharashtra`.
    #[schema(value_type = String)]
    pub domicile: Domicile,
}

#[utoipa::path(
    put,
    path = "/v1/profile",
    tag = "profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 204, description = "Search defaults updated"),
        (status = 401, description = "No signed-in session"),
        (status = 404, description = "No profile row for the user"),
        (status = 422, description = "Percentile out of range")
    )
)]
pub async fn update<P: IdentityProvider + 'static>(
    State(state): State<AppState<P>>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<StatusCode, AppError> {
    let user_id = state.require_user()?;
    let percentile =
        Percentile::new(request.percentile).map_err(|err| AppError::Validation(err.to_string()))?;
    let defaults = SearchDefaults {
        percentile,
        category: request.category,
        domicile: request.domicile,
    };
    state
        .store
        .update_search_defaults(&user_id, &defaults)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
