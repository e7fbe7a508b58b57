//! # Application State
//!
//! Shared state for the Axum application: the configured store backend,
//! the observable auth session, the active rule set, and the optional
//! Prometheus handle.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use cetplan_auth::{IdentityProvider, Session};
use cetplan_core::UserId;
use cetplan_predict::RuleSet;
use cetplan_store::StoreBackend;

use crate::error::AppError;

/// Shared application state passed to all route handlers.
pub struct AppState<P> {
    /// Configured store backend.
    pub store: StoreBackend,
    /// Observable session; handlers read the current identity from here.
    pub session: Arc<Session<P>>,
    /// The rule set submissions are evaluated against.
    pub rules: RuleSet,
    /// Prometheus render handle, when the exporter is installed.
    pub metrics: Option<PrometheusHandle>,
}

// Derived Clone would require `P: Clone`; the session is shared by Arc.
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            session: Arc::clone(&self.session),
            rules: self.rules.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl<P: IdentityProvider> AppState<P> {
    pub fn new(store: StoreBackend, session: Arc<Session<P>>, rules: RuleSet) -> Self {
        Self {
            store,
            session,
            rules,
            metrics: None,
        }
    }

    /// Attach a Prometheus render handle for `GET /metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// The signed-in user, or `401` when there is no session.
    pub fn require_user(&self) -> Result<UserId, AppError> {
        self.session
            .current_user()
            .map(|identity| identity.user_id)
            .ok_or_else(|| AppError::Unauthorized("sign in to continue".into()))
    }
}
