//! # cetplan-auth — Auth Session Provider
//!
//! Exposes the current user identity and a sign-out action to the rest of
//! the workspace. The identity protocol itself (tokens, refresh, signup) is
//! delegated to an external provider behind the [`IdentityProvider`] trait;
//! this crate owns only the session state and its lifecycle.
//!
//! ## Session Lifecycle
//!
//! [`Session`] holds the provider plus an observable
//! [`SessionState`] (`current_user`, `is_loading`) in a `tokio::sync::watch`
//! channel. Dependents subscribe rather than read global state: when the
//! identity changes — a refresh resolves, a sign-out clears the user — every
//! subscriber is woken so it can re-fetch the profile for the new identity.
//!
//! ## Failure Semantics
//!
//! Sign-out failure surfaces as [`AuthError`] and leaves the session state
//! untouched; the user stays signed in and can retry. Nothing here is
//! fatal.

pub mod error;
pub mod provider;
pub mod session;

pub use error::AuthError;
pub use provider::{Identity, IdentityProvider, StaticProvider};
pub use session::{Session, SessionState};
