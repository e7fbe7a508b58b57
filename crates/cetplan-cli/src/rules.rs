//! # Rules Subcommand
//!
//! Validates a YAML rule document against the embedded schema and reports
//! violations with their document paths.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use cetplan_predict::{RuleSet, RuleSetError};
use cetplan_schema::RuleDocumentError;

/// Arguments for the rules subcommand.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Rule document to validate.
    pub file: PathBuf,
}

/// Load a rule set from an optional YAML file, falling back to the
/// built-in sample set.
pub fn load_rule_set(path: Option<&Path>) -> anyhow::Result<RuleSet> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            RuleSet::from_yaml(&text)
                .with_context(|| format!("loading rule set from {}", path.display()))
        }
        None => Ok(RuleSet::sample()),
    }
}

pub fn run(args: RulesArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    match RuleSet::from_yaml(&text) {
        Ok(set) => {
            println!(
                "{}: ok ({} rules, filter band {})",
                args.file.display(),
                set.rules.len(),
                set.filter_band_width
            );
            Ok(())
        }
        Err(RuleSetError::Document(RuleDocumentError::ValidationFailed(violations))) => {
            for violation in &violations {
                eprintln!("  {}: {}", violation.instance_path, violation.message);
            }
            anyhow::bail!(
                "{}: {} schema violation(s)",
                args.file.display(),
                violations.len()
            )
        }
        Err(err) => Err(err.into()),
    }
}
