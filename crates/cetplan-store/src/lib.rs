//! # cetplan-store — Store Access
//!
//! Data access for the CET Planner against the externally managed
//! relational store. The store owns the schema, row-level security, and the
//! profile-creation trigger; this crate only issues equality-filtered
//! `select`/`insert`/`update` operations against the tables declared in
//! `cetplan-schema`.
//!
//! ## Access Traits
//!
//! - [`ProfileStore`] — fetch/update the single profile row keyed by user
//!   identity.
//! - [`PredictionStore`] — append prediction records, read them back
//!   most-recent-first. No update or delete path exists by design.
//! - [`ReferenceStore`] — read-only closing cutoffs joined across the
//!   reference tables.
//!
//! ## Backends
//!
//! - [`MemoryStore`] — in-process maps behind a `tokio` lock; used by tests
//!   and by `cetplan serve` when no database is configured. Supports
//!   injected write failures for exercising the fire-and-forget paths.
//! - [`PgStore`] — Postgres via SQLx runtime queries.
//! - [`StoreBackend`] — configured backend selection, delegating to either.
//!
//! ## Failure Semantics
//!
//! Every operation is independently fallible and is never retried here.
//! `StoreError::NotFound` from a profile fetch means "no profile yet" and
//! is not fatal; callers convert other failures into notifications or
//! tracing diagnostics. Writes are best-effort with no cross-write
//! transactional guarantee — the store provides row-level consistency per
//! write, nothing broader.

pub mod access;
pub mod backend;
pub mod error;
pub mod memory;
pub mod postgres;

pub use access::{ClosingCutoff, PredictionStore, ProfileStore, ReferenceStore, SearchDefaults};
pub use backend::StoreBackend;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
