//! # cetplan-cli — CET Planner CLI
//!
//! Subcommand handlers for the `cetplan` binary:
//!
//! - `serve` — run the HTTP API service
//! - `predict` — evaluate a percentile against a rule set, offline
//! - `rules` — validate a YAML rule document

pub mod predict;
pub mod rules;
pub mod serve;
