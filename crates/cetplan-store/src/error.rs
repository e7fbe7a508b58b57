//! # Store Error Taxonomy
//!
//! One error type for every store operation. `NotFound` is a first-class
//! variant rather than an `Option` because the caller-facing contract
//! distinguishes "no profile yet" (non-fatal, leave the form blank) from
//! transport and permission failures (surfaced as notifications).

use thiserror::Error;

/// Failure of a single store operation. Never retried at this layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The equality filter matched zero rows.
    #[error("no {table} row for {key}")]
    NotFound {
        /// Table that was queried.
        table: &'static str,
        /// Human-readable key description, e.g. the user identity.
        key: String,
    },

    /// Network or protocol failure reaching the store.
    #[error("store transport error: {0}")]
    Transport(String),

    /// The store rejected the operation (row-level security, grants).
    #[error("store permission denied: {0}")]
    Permission(String),

    /// A declared constraint rejected the write.
    #[error("store constraint violation: {0}")]
    Constraint(String),

    /// The row came back in a shape the contract does not admit —
    /// the schema-drift defect class surfacing at runtime.
    #[error("row decode error on {table}: {reason}")]
    Decode {
        /// Table whose row failed to decode.
        table: &'static str,
        /// Decoder diagnostic.
        reason: String,
    },
}

impl StoreError {
    /// Whether this is the non-fatal "no row yet" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = StoreError::NotFound {
            table: "profiles",
            key: "user:123".into(),
        };
        assert!(err.is_not_found());
        assert!(!StoreError::Transport("timeout".into()).is_not_found());
    }

    #[test]
    fn test_display_names_table() {
        let err = StoreError::NotFound {
            table: "profiles",
            key: "user:123".into(),
        };
        assert_eq!(err.to_string(), "no profiles row for user:123");
    }
}
