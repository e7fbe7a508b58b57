//! # Auth Routes
//!
//! Routes:
//! - POST /v1/auth/sign-out — sign out at the provider and clear the
//!   session
//!
//! Sign-in and signup live at the external identity provider; only the
//! sign-out action passes through this service.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use cetplan_auth::IdentityProvider;
use cetplan_predict::Notification;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SignOutResponse {
    pub signed_out: bool,
    /// Toast-style feedback: title, description, severity.
    #[schema(value_type = Object)]
    pub notification: Notification,
}

/// Provider failure maps to `502` and the session stays signed in.
#[utoipa::path(
    post,
    path = "/v1/auth/sign-out",
    tag = "auth",
    responses(
        (status = 200, description = "Session cleared", body = SignOutResponse),
        (status = 502, description = "Identity provider failure; the session is unchanged")
    )
)]
pub async fn sign_out<P: IdentityProvider + 'static>(
    State(state): State<AppState<P>>,
) -> Result<Json<SignOutResponse>, AppError> {
    state.session.sign_out().await?;
    Ok(Json(SignOutResponse {
        signed_out: true,
        notification: Notification::info("Signed Out", "You have been successfully signed out."),
    }))
}
