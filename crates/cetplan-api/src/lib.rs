//! # cetplan-api — Axum Presentation Layer
//!
//! The HTTP surface of the CET Planner, built on Axum/Tower/Tokio. Route
//! handlers hold no business logic: they read the session, delegate to the
//! store and the prediction workflow, and shape the results into view
//! models — probability color classes included.
//!
//! ## Routes
//!
//! - `GET  /v1/profile` — profile plus search-form pre-fill values
//! - `PUT  /v1/profile` — update the three search defaults
//! - `POST /v1/predictions` — run one search submission
//! - `GET  /v1/predictions` — prediction history, most recent first
//! - `POST /v1/auth/sign-out` — sign out and clear the session
//! - `GET  /health` — liveness check (unauthenticated)
//! - `GET  /metrics` — Prometheus exposition, when installed
//! - `GET  /api-docs/openapi.json` — OpenAPI document, generated from the
//!   handler types via utoipa
//!
//! ## Feedback Channel
//!
//! User-visible feedback travels as `notifications` arrays inside `200`
//! responses, mirroring the dashboard's toast surface. HTTP error statuses
//! are reserved for transport-level failures: no session (`401`), malformed
//! typed bodies (`422`), upstream store or provider trouble (`502`).

pub mod error;
pub mod routes;
pub mod state;
pub mod view;

pub use error::AppError;
pub use state::AppState;
pub use view::probability_color_class;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use cetplan_auth::IdentityProvider;

/// OpenAPI 3.1 document for the v1 surface, generated from handler types.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CET Planner API",
        description = "College admission predictions for MHT-CET percentile scores."
    ),
    paths(
        routes::health::health,
        routes::profile::fetch,
        routes::profile::update,
        routes::predictions::submit,
        routes::predictions::history,
        routes::auth::sign_out,
    ),
    components(schemas(
        routes::profile::ProfileResponse,
        routes::profile::UpdateProfileRequest,
        routes::predictions::SubmitRequest,
        routes::predictions::SubmitResponse,
        routes::predictions::HistoryResponse,
        routes::auth::SignOutResponse,
        view::PredictionView,
        view::PredictionRecordView,
        view::SnapshotEntryView,
        view::SearchFormView,
    ))
)]
pub struct ApiDoc;

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Assemble the application router over the given state.
pub fn app<P: IdentityProvider + 'static>(state: AppState<P>) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/metrics", get(routes::health::metrics::<P>))
        .route("/api-docs/openapi.json", get(openapi_document))
        .route(
            "/v1/profile",
            get(routes::profile::fetch::<P>).put(routes::profile::update::<P>),
        )
        .route(
            "/v1/predictions",
            get(routes::predictions::history::<P>).post(routes::predictions::submit::<P>),
        )
        .route("/v1/auth/sign-out", post(routes::auth::sign_out::<P>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
