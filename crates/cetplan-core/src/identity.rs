//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all row identifiers in the CET Planner. These prevent
//! accidental identifier confusion — you cannot pass a `CollegeId` where a
//! `BranchId` is expected, and a `UserId` (the auth provider's stable subject
//! reference) is never interchangeable with a `ProfileId` (the profile row's
//! own primary key).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an authenticated user, issued by the external
/// identity provider. `profiles.user_id` and `user_predictions.user_id`
/// reference this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

/// Primary key of a `profiles` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub Uuid);

/// Primary key of a `user_predictions` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredictionId(pub Uuid);

/// Primary key of a `colleges` row (reference data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollegeId(pub Uuid);

/// Primary key of a `branches` row (reference data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BranchId(pub Uuid);

/// Primary key of a `college_branches` row (reference data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollegeBranchId(pub Uuid);

/// Primary key of a `cutoffs` row (reference data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CutoffId(pub Uuid);

macro_rules! id_impls {
    ($($ty:ident => $prefix:literal),* $(,)?) => {
        $(
            impl $ty {
                /// Generate a new random identifier.
                pub fn new() -> Self {
                    Self(Uuid::new_v4())
                }

                /// Access the inner UUID.
                pub fn as_uuid(&self) -> &Uuid {
                    &self.0
                }
            }

            impl Default for $ty {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, concat!($prefix, ":{}"), self.0)
                }
            }
        )*
    };
}

id_impls! {
    UserId => "user",
    ProfileId => "profile",
    PredictionId => "prediction",
    CollegeId => "college",
    BranchId => "branch",
    CollegeBranchId => "college-branch",
    CutoffId => "cutoff",
}
