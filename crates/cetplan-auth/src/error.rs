//! # Auth Errors

use thiserror::Error;

/// Failure at the identity boundary. Surfaced to the user; never fatal,
/// and never mutates session state on its own.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// The identity provider rejected the request.
    #[error("identity provider error: {0}")]
    Provider(String),

    /// The provider could not be reached.
    #[error("identity provider unreachable: {0}")]
    Network(String),
}
