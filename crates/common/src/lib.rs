//! Shared configuration, database pool, and error handling for Chateai
//!
//! This crate provides common functionality used across the Chateai store:
//! - Configuration loaded from the environment
//! - Error types and handling
//! - SQLite pool construction

pub mod config;
pub mod db;
pub mod error;

pub use config::{Config, DatabaseConfig, LogFormat};
pub use db::RepositoryError;
pub use error::{Error, Result};
