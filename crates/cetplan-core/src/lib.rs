//! # cetplan-core — Foundational Types for the CET Planner
//!
//! This crate is the bedrock of the CET Planner workspace. It defines the
//! domain primitives shared by every other crate: identifier newtypes,
//! validated percentiles, the admission category and domicile taxonomies,
//! probability labels, and UTC-only timestamps.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `UserId`, `ProfileId`,
//!    `PredictionId`, `CollegeId`, `BranchId`, `CollegeBranchId`, `CutoffId` —
//!    all newtypes over UUIDs. No bare strings for identifiers, and no passing
//!    a `CollegeId` where a `BranchId` is expected.
//!
//! 2. **Validated `Percentile`.** All exam percentiles flow through
//!    `Percentile::new()`, which rejects values outside `[0, 100]` and
//!    non-finite floats. There is no way to hold an out-of-range percentile.
//!
//! 3. **Single `Category` and `Domicile` enums.** One definition each,
//!    exhaustive `match` everywhere. Wire strings match the external store's
//!    text columns exactly.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with seconds
//!    precision, so row timestamps round-trip deterministically.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cetplan-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod category;
pub mod domicile;
pub mod error;
pub mod identity;
pub mod percentile;
pub mod probability;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use category::Category;
pub use domicile::Domicile;
pub use error::CoreError;
pub use identity::{
    BranchId, CollegeBranchId, CollegeId, CutoffId, PredictionId, ProfileId, UserId,
};
pub use percentile::Percentile;
pub use probability::Probability;
pub use temporal::Timestamp;
