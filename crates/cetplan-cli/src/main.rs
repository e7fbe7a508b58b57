//! # cetplan CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// CET Planner — college admission prediction toolchain.
///
/// Serves the prediction API, validates rule documents, and evaluates
/// percentiles against a rule set without a running service.
#[derive(Parser, Debug)]
#[command(name = "cetplan", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API service.
    Serve(cetplan_cli::serve::ServeArgs),
    /// Evaluate a percentile against a rule set, offline.
    Predict(cetplan_cli::predict::PredictArgs),
    /// Validate a YAML rule document.
    Rules(cetplan_cli::rules::RulesArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => cetplan_cli::serve::run(args).await,
        Commands::Predict(args) => cetplan_cli::predict::run(args),
        Commands::Rules(args) => cetplan_cli::rules::run(args),
    }
}
