//! # Identity Provider Boundary
//!
//! The trait the session delegates to, and a static implementation for
//! tests and the demo server. A production deployment implements
//! [`IdentityProvider`] against the hosted identity service; that protocol
//! is out of scope here.

use std::future::Future;

use serde::{Deserialize, Serialize};

use cetplan_core::UserId;

use crate::error::AuthError;

/// An authenticated identity: the opaque stable user reference plus the
/// display fields the provider shares with us.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable subject reference, `profiles.user_id`-compatible.
    pub user_id: UserId,
    /// Email on record with the provider, if shared.
    pub email: Option<String>,
    /// Display name on record with the provider, if shared.
    pub full_name: Option<String>,
}

impl Identity {
    /// An identity carrying only the subject reference.
    pub fn bare(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
            full_name: None,
        }
    }
}

/// The external identity service, reduced to the two calls this system
/// issues: resolve the current session's identity, and sign out.
pub trait IdentityProvider: Send + Sync {
    /// Resolve the current identity, or `None` when no session exists.
    fn resolve(&self) -> impl Future<Output = Result<Option<Identity>, AuthError>> + Send;

    /// Invalidate the provider-side session. The only mutating call this
    /// system issues to the identity boundary.
    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>> + Send;
}

/// A provider with a fixed identity, for tests and `cetplan serve` demo
/// mode. Sign-out failure can be injected to exercise the error path.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    identity: Option<Identity>,
    fail_sign_out: bool,
}

impl StaticProvider {
    /// A provider that resolves to the given identity.
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            fail_sign_out: false,
        }
    }

    /// A provider with no session.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Make `sign_out` fail with a network error.
    pub fn with_failing_sign_out(mut self) -> Self {
        self.fail_sign_out = true;
        self
    }
}

impl IdentityProvider for StaticProvider {
    async fn resolve(&self) -> Result<Option<Identity>, AuthError> {
        Ok(self.identity.clone())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if self.fail_sign_out {
            Err(AuthError::Network("injected sign-out failure".into()))
        } else {
            Ok(())
        }
    }
}
