//! # Predict Subcommand
//!
//! Offline evaluation: parse the submitted fields exactly the way the
//! service does, run the engine, and print the labeled predictions as
//! JSON. Nothing is stored.

use std::path::PathBuf;

use clap::Args;

use cetplan_core::{Category, Domicile, Percentile};
use cetplan_predict::evaluate;

/// Arguments for the predict subcommand.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Percentile to evaluate, as submitted.
    #[arg(long)]
    pub percentile: String,

    /// Category code (OPEN, OBC, SC, ST, EWS).
    #[arg(long, default_value = "OPEN")]
    pub category: String,

    /// Domicile status.
    #[arg(long, default_value = "Maharashtra")]
    pub domicile: String,

    /// YAML rule document; the built-in sample set when omitted.
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

pub fn run(args: PredictArgs) -> anyhow::Result<()> {
    let percentile = Percentile::parse(&args.percentile)?;
    // Parsed for the same validation the service applies; the sample rule
    // set is not keyed by them.
    let category: Category = args.category.parse()?;
    let domicile: Domicile = args.domicile.parse()?;

    let rules = crate::rules::load_rule_set(args.rules.as_deref())?;
    let predictions = evaluate(&rules, percentile);
    tracing::info!(
        category = category.as_str(),
        domicile = domicile.as_str(),
        count = predictions.len(),
        "evaluated rule set"
    );
    println!("{}", serde_json::to_string_pretty(&predictions)?);
    Ok(())
}
