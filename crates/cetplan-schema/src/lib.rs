//! # cetplan-schema — Schema Contracts for the External Store
//!
//! The CET Planner owns no storage. Profiles, prediction records, and the
//! college/branch/cutoff reference data live in an externally managed
//! relational store; this crate is the typing boundary between that store
//! and the rest of the workspace.
//!
//! ## Three Shapes Per Table
//!
//! Every table is described by three structs:
//!
//! - `*Row` — the read shape, exactly what a `SELECT` returns.
//! - `*Insert` — the write shape for inserts; server-defaulted columns
//!   (`id`, `created_at`, `updated_at`) are optional.
//! - `*Update` — the patch shape; every field is optional.
//!
//! Declared foreign keys live in [`relations`], so join-aware queries can be
//! checked against the same contract the row shapes come from.
//!
//! ## Drift
//!
//! These contracts must be kept in sync with the external schema by hand.
//! Drift is a latent defect class: nothing at runtime checks a `*Row` struct
//! against the live table, and a missing column surfaces only as a decode
//! error at the call site.
//!
//! ## Rule Documents
//!
//! Prediction rule sets are injected configuration. [`rules`] embeds a JSON
//! Schema (Draft 2020-12) for rule documents and validates instances with
//! structured violation reporting before a rule set is accepted.

pub mod relations;
pub mod rules;
pub mod tables;

pub use relations::{ForeignKey, Table};
pub use rules::{
    rule_document_from_yaml, validate_rule_document, RuleDocumentError, Violation,
    RULE_DOCUMENT_SCHEMA,
};
pub use tables::{
    BranchInsert, BranchRow, BranchUpdate, CollegeBranchInsert, CollegeBranchRow,
    CollegeBranchUpdate, CollegeInsert, CollegeRow, CollegeUpdate, CutoffInsert, CutoffRow,
    CutoffUpdate, ProfileInsert, ProfileRow, ProfileUpdate, UserPredictionInsert,
    UserPredictionRow, UserPredictionUpdate,
};
