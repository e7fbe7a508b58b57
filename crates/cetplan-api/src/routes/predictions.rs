//! # Prediction Routes
//!
//! Routes:
//! - POST /v1/predictions — run one search submission through the workflow
//! - GET  /v1/predictions — prediction history, most recent first
//!
//! A rejected submission is still a `200`: validation feedback travels in
//! the `notifications` array, the same channel the dashboard's toasts use,
//! not as an HTTP failure.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use cetplan_auth::IdentityProvider;
use cetplan_predict::{
    Notification, NotificationLog, PredictionWorkflow, SearchInput, SubmissionOutcome,
};
use cetplan_store::PredictionStore;

use crate::error::AppError;
use crate::state::AppState;
use crate::view::{PredictionRecordView, PredictionView};

/// Raw form fields. Absent fields default to empty strings so the
/// workflow's own validation decides what is missing.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SubmitRequest {
    #[serde(default)]
    pub percentile: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub domicile: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    /// False when validation rejected the submission.
    pub accepted: bool,
    pub match_count: usize,
    pub predictions: Vec<PredictionView>,
    /// Toast-style feedback: title, description, severity.
    #[schema(value_type = Vec<Object>)]
    pub notifications: Vec<Notification>,
}

#[utoipa::path(
    post,
    path = "/v1/predictions",
    tag = "predictions",
    request_body = SubmitRequest,
    responses(
        (status = 200, description = "Submission processed; validation feedback travels in `notifications`", body = SubmitResponse),
        (status = 401, description = "No signed-in session")
    )
)]
pub async fn submit<P: IdentityProvider + 'static>(
    State(state): State<AppState<P>>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let user_id = state.require_user()?;
    let log = NotificationLog::new();
    let workflow =
        PredictionWorkflow::new(state.store.clone(), log.clone(), state.rules.clone());
    let input = SearchInput {
        percentile: request.percentile,
        category: request.category,
        domicile: request.domicile,
    };
    let outcome = workflow.submit(&user_id, &input).await;
    let predictions: Vec<PredictionView> =
        outcome.predictions().iter().map(PredictionView::from).collect();
    Ok(Json(SubmitResponse {
        accepted: matches!(outcome, SubmissionOutcome::Completed { .. }),
        match_count: predictions.len(),
        predictions,
        notifications: log.drain(),
    }))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub predictions: Vec<PredictionRecordView>,
}

#[utoipa::path(
    get,
    path = "/v1/predictions",
    tag = "predictions",
    responses(
        (status = 200, description = "Prediction history, most recent first", body = HistoryResponse),
        (status = 401, description = "No signed-in session")
    )
)]
pub async fn history<P: IdentityProvider + 'static>(
    State(state): State<AppState<P>>,
) -> Result<Json<HistoryResponse>, AppError> {
    let user_id = state.require_user()?;
    let rows = state.store.predictions_for_user(&user_id).await?;
    Ok(Json(HistoryResponse {
        predictions: rows.iter().map(PredictionRecordView::from).collect(),
    }))
}
