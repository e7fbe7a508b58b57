//! # Serve Subcommand
//!
//! Runs the API service. With `--database-url` (or `DATABASE_URL`) the
//! store is Postgres; without it an in-memory demo store is seeded with one
//! profile so the whole flow works out of the box.
//!
//! The identity protocol lives at the external provider, so the service
//! runs against one fixed identity; `--user-id` pins it to a real row when
//! serving against Postgres.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use metrics_exporter_prometheus::PrometheusBuilder;
use uuid::Uuid;

use cetplan_api::AppState;
use cetplan_auth::{Identity, Session, StaticProvider};
use cetplan_core::{ProfileId, Timestamp, UserId};
use cetplan_schema::ProfileRow;
use cetplan_store::{MemoryStore, StoreBackend};

/// Arguments for the serve subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Postgres connection URL; an in-memory demo store when omitted.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// YAML rule document; the built-in sample set when omitted.
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// User id to sign in as; a fresh id when omitted.
    #[arg(long)]
    pub user_id: Option<Uuid>,
}

pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rules = crate::rules::load_rule_set(args.rules.as_deref())?;
    let user_id = args.user_id.map(UserId).unwrap_or_else(UserId::new);

    let store = match &args.database_url {
        Some(url) => StoreBackend::postgres(url)
            .await
            .context("connecting to Postgres")?,
        None => {
            tracing::warn!("no database configured, serving from an in-memory demo store");
            StoreBackend::from(demo_store(user_id).await)
        }
    };

    let session = Session::new(StaticProvider::signed_in(Identity {
        user_id,
        email: Some("demo@cetplan.example".into()),
        full_name: Some("Demo Student".into()),
    }));
    session.refresh().await?;

    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .context("installing Prometheus recorder")?;
    let state = AppState::new(store, Arc::new(session), rules).with_metrics(metrics);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    tracing::info!(addr = %args.bind, %user_id, "cetplan API listening");
    axum::serve(listener, cetplan_api::app(state)).await?;
    Ok(())
}

async fn demo_store(user_id: UserId) -> MemoryStore {
    let store = MemoryStore::new();
    store
        .seed_profile(ProfileRow {
            id: ProfileId::new(),
            user_id,
            full_name: "Demo Student".into(),
            email: "demo@cetplan.example".into(),
            percentile: None,
            category: None,
            domicile: None,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        })
        .await;
    store
}
