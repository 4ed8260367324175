//! Configuration management
//!
//! All configuration is loaded from environment variables (with an optional
//! `.env` file) so the store can be pointed at a different database without
//! code changes.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Default database location, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./data/data.db";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default tracing filter; sqlx statement logging is kept quiet
pub const DEFAULT_RUST_LOG: &str = "info,sqlx=warn";

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!(
                "LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                other
            )),
        }
    }
}

/// Connection settings for the SQLite pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx SQLite URL, e.g. `sqlite://./data/data.db` or `sqlite::memory:`
    pub url: String,

    /// Upper bound on pooled connections
    pub max_connections: u32,

    /// Whether `PRAGMA foreign_keys` is enabled on every connection
    pub foreign_keys: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            foreign_keys: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,

    /// Runtime configuration
    pub rust_log: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => {
                let parsed: u32 = raw.parse().map_err(|_| {
                    anyhow::anyhow!("DATABASE_MAX_CONNECTIONS must be an integer, got '{}'", raw)
                })?;
                if parsed == 0 {
                    return Err(anyhow::anyhow!(
                        "DATABASE_MAX_CONNECTIONS must be at least 1"
                    ));
                }
                parsed
            }
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let foreign_keys = match env::var("DATABASE_FOREIGN_KEYS") {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| {
                anyhow::anyhow!("DATABASE_FOREIGN_KEYS must be true or false, got '{}'", raw)
            })?,
            Err(_) => true,
        };

        let log_format = match env::var("LOG_FORMAT") {
            Ok(raw) => raw.parse()?,
            Err(_) => LogFormat::default(),
        };

        let config = Self {
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections,
                foreign_keys,
            },
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.to_string()),
            log_format,
        };

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
