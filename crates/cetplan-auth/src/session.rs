//! # Observable Session State
//!
//! The session wraps an identity provider and publishes its state through a
//! `watch` channel. State is immutable per observation: readers get a
//! cloned snapshot, and mutation happens only through [`Session::refresh`]
//! and [`Session::sign_out`].

use tokio::sync::watch;

use crate::error::AuthError;
use crate::provider::{Identity, IdentityProvider};

/// A snapshot of the session at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// The authenticated identity, or `None` when signed out.
    pub current_user: Option<Identity>,
    /// True until the first `refresh` resolves.
    pub is_loading: bool,
}

/// Session provider: owns the identity provider and the observable state.
#[derive(Debug)]
pub struct Session<P> {
    provider: P,
    state: watch::Sender<SessionState>,
}

impl<P: IdentityProvider> Session<P> {
    /// Create a session in the loading state. Callers should `refresh`
    /// once the runtime is up.
    pub fn new(provider: P) -> Self {
        let (state, _) = watch::channel(SessionState {
            current_user: None,
            is_loading: true,
        });
        Self { provider, state }
    }

    /// Resolve the current identity from the provider and publish it.
    ///
    /// On provider failure the previous identity is kept (a transient
    /// resolution failure must not sign the user out), but the loading
    /// flag still clears so the UI can settle.
    pub async fn refresh(&self) -> Result<(), AuthError> {
        let resolved = self.provider.resolve().await;
        match resolved {
            Ok(identity) => {
                self.state.send_modify(|state| {
                    state.current_user = identity;
                    state.is_loading = false;
                });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "identity resolution failed");
                self.state.send_modify(|state| state.is_loading = false);
                Err(err)
            }
        }
    }

    /// Sign out at the provider, then clear the local session.
    ///
    /// # Errors
    ///
    /// Provider/network failure returns [`AuthError`] and leaves the
    /// session state unchanged — the user remains signed in and can retry.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await?;
        self.state.send_modify(|state| state.current_user = None);
        Ok(())
    }

    /// The current identity, if any.
    pub fn current_user(&self) -> Option<Identity> {
        self.state.borrow().current_user.clone()
    }

    /// Whether the initial resolution is still in flight.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    /// Subscribe to session changes. Dependents re-fetch the profile when
    /// the received state's identity differs from what they rendered.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticProvider;
    use cetplan_core::UserId;

    fn identity() -> Identity {
        Identity {
            user_id: UserId::new(),
            email: Some("asha@example.com".into()),
            full_name: Some("Asha Kulkarni".into()),
        }
    }

    #[tokio::test]
    async fn test_starts_loading_with_no_user() {
        let session = Session::new(StaticProvider::signed_in(identity()));
        assert!(session.is_loading());
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn test_refresh_resolves_identity() {
        let id = identity();
        let session = Session::new(StaticProvider::signed_in(id.clone()));
        session.refresh().await.unwrap();
        assert!(!session.is_loading());
        assert_eq!(session.current_user(), Some(id));
    }

    #[tokio::test]
    async fn test_refresh_with_no_session_clears_loading() {
        let session = Session::new(StaticProvider::signed_out());
        session.refresh().await.unwrap();
        assert!(!session.is_loading());
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn test_sign_out_clears_user() {
        let session = Session::new(StaticProvider::signed_in(identity()));
        session.refresh().await.unwrap();
        session.sign_out().await.unwrap();
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn test_failed_sign_out_keeps_user() {
        let id = identity();
        let session =
            Session::new(StaticProvider::signed_in(id.clone()).with_failing_sign_out());
        session.refresh().await.unwrap();

        let err = session.sign_out().await.unwrap_err();
        assert!(matches!(err, AuthError::Network(_)));
        // Session state unaffected by the failure.
        assert_eq!(session.current_user(), Some(id));
    }

    #[tokio::test]
    async fn test_subscribers_observe_sign_out() {
        let session = Session::new(StaticProvider::signed_in(identity()));
        session.refresh().await.unwrap();

        let mut rx = session.subscribe();
        rx.mark_unchanged();

        session.sign_out().await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().current_user.is_none());
    }
}
