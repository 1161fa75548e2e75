//! Apply the embedded schema migrations and confirm the pool can connect.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::ffi::OsString;

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use social_backend::outbound::persistence::{DatabaseSettings, DbPool, run_pending_migrations};
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `social-migrate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "social-migrate",
    about = "Apply pending schema migrations for the social backend",
    version
)]
struct CliArgs {
    /// Database connection URL. Overrides `SOCIAL_DATABASE_URL` and
    /// `DATABASE_URL`.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: CliArgs) -> Result<()> {
    let loaded = DatabaseSettings::load_from_iter([OsString::from("social-migrate")])
        .map_err(|err| eyre!("load database settings: {err}"))?;
    let settings = with_url_overrides(loaded, args.database_url, env::var("DATABASE_URL").ok());
    let pool_config = settings.pool_config()?;

    let database_url = pool_config.database_url().to_owned();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
        .await
        .wrap_err("migration task panicked")??;

    if applied.is_empty() {
        info!("schema already up to date");
    } else {
        info!(count = applied.len(), "applied pending migrations");
    }

    let max_size = pool_config.max_size();
    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("create database pool")?;
    pool.get().await.wrap_err("check out pooled connection")?;
    info!(max_size, "database pool ready");

    for version in applied {
        println!("applied={version}");
    }
    Ok(())
}

/// Layer the CLI flag and the generic `DATABASE_URL` over loaded settings.
///
/// The flag always wins; `DATABASE_URL` only fills a missing value.
fn with_url_overrides(
    mut settings: DatabaseSettings,
    flag: Option<String>,
    fallback: Option<String>,
) -> DatabaseSettings {
    if flag.is_some() {
        settings.database_url = flag;
    } else if settings.database_url.is_none() {
        settings.database_url = fallback;
    }
    settings
}
