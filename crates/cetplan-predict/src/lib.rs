//! # cetplan-predict — Prediction Workflow
//!
//! The one piece of design logic in the CET Planner: turn a submitted
//! percentile/category/domicile triple into a labeled, filtered list of
//! college predictions, persisting the profile defaults and an append-only
//! prediction record along the way.
//!
//! ## Flow
//!
//! One linear pass per submission, no persisted intermediate state:
//!
//! 1. **Validate** the form fields; a missing field notifies and stops
//!    before any write.
//! 2. **Persist profile** defaults — failure is surfaced but never blocks
//!    the search.
//! 3. **Compute** labels over the injected rule set and filter by the band.
//! 4. **Persist** the prediction record, fire-and-forget.
//! 5. **Report** the match count and return the in-memory list.
//!
//! Steps are awaited sequentially but 3–5 never depend on 2 succeeding;
//! only validation aborts. There is no retry, no idempotency key, and no
//! cancellation — a resubmission creates a second prediction row.
//!
//! ## Rules Are Data
//!
//! Every rule record carries its own `closing_percentile` and
//! `medium_band_width`; the sample set's widths (2.2, 2.3, 2.5) are
//! deliberately per-record values, not a formula. Rule sets load from
//! schema-validated YAML documents or convert from stored cutoff rows.

pub mod engine;
pub mod notify;
pub mod rule;
pub mod workflow;

pub use engine::{evaluate, label, CollegePrediction};
pub use notify::{Notification, NotificationLog, Notifier, Severity, TracingNotifier};
pub use rule::{PredictionRule, RuleSet, RuleSetError, DEFAULT_FILTER_BAND_WIDTH};
pub use workflow::{
    search_defaults_from_profile, PredictionWorkflow, SearchInput, SubmissionOutcome,
};
