//! Catalog server binary: load config, connect and migrate the database,
//! serve the REST API until shutdown.

mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use catalog::domain::page::LimitCfg;
use catalog::infra::storage::migrations::Migrator;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "catalog-server", about = "PC hardware catalog service")]
struct Cli {
    /// Path to a YAML config file.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit.
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the server (default).
    Run,
    /// Validate configuration and database connectivity, then exit.
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    if cli.print_config {
        print!("{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    init_tracing(&config.logging.filter);

    match cli.command.unwrap_or(Command::Run) {
        Command::Check => check(&config).await,
        Command::Run => run(config).await,
    }
}

fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn connect(config: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.database.url.clone());
    opts.max_connections(config.database.max_connections);
    Database::connect(opts)
        .await
        .context("connecting to the database")
}

async fn check(config: &AppConfig) -> anyhow::Result<()> {
    let db = connect(config).await?;
    db.ping().await.context("pinging the database")?;
    tracing::info!("configuration and database connectivity OK");
    Ok(())
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let db = connect(&config).await?;
    Migrator::up(&db, None).await.context("running migrations")?;

    let limits = LimitCfg {
        default: config.paging.default_limit,
        max: config.paging.max_limit,
    };
    let state = catalog::module::build_state(db, limits);
    let app = catalog::api::rest::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(30)));

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr)
        .await
        .context("binding listen address")?;
    tracing::info!(addr = %config.server.bind_addr, "catalog server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;
    tracing::info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
