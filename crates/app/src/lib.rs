//! Chateai application composition root
//!
//! Wires configuration, logging, and the SQLite pool into a [`ChatCore`].

use std::str::FromStr;

use chateai_common::config::{Config, DatabaseConfig, LogFormat};
use chateai_common::db;
use chateai_conversations::ChatCore;
use sqlx::sqlite::SqliteConnectOptions;
use tracing_subscriber::EnvFilter;

/// Build the log filter from `RUST_LOG`, rejecting malformed directives
pub fn log_filter(config: &Config) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(&config.rust_log)
        .map_err(|e| anyhow::anyhow!("RUST_LOG is not a valid filter '{}': {}", config.rust_log, e))
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so stdout is left for rendered envelopes.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = log_filter(config)?;

    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .pretty()
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init(),
    }
    Ok(())
}

/// Create the directory holding a file database, if any
pub fn ensure_data_dir(config: &DatabaseConfig) -> anyhow::Result<()> {
    if config.url.contains(":memory:") {
        return Ok(());
    }

    let options = SqliteConnectOptions::from_str(&config.url)?;
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create data directory {}: {}", parent.display(), e)
            })?;
        }
    }
    Ok(())
}

/// Open the database, provision the schema, and build the facade
pub async fn bootstrap(config: &Config) -> anyhow::Result<ChatCore> {
    ensure_data_dir(&config.database)?;

    let pool = db::connect(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;
    tracing::info!("Database connection established");

    let core = ChatCore::open(pool).await?;
    Ok(core)
}
