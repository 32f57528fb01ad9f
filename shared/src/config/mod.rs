//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Admin and visitor token schemes, password hashing
//! - `database` - SQLite connection pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server configuration
//!
//! Everything is loaded from environment variables (optionally via a `.env`
//! file loaded by the binary) and then passed explicitly to the services that
//! need it.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub use auth::{AuthConfig, JwtSchemeConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required setting: {0}")]
    Missing(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
        }
    }

    /// Validate the configuration for the current environment
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.validate()?;

        if self.environment.is_production() {
            if self.auth.is_using_default_secrets() {
                return Err(ConfigError::Missing(
                    "JWT_SECRET and VISITOR_JWT_SECRET must be set in production".to_string(),
                ));
            }
            if self.database.is_in_memory() {
                return Err(ConfigError::Invalid(
                    "in-memory database is not allowed in production".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Read and parse an environment variable, falling back to `default` when it
/// is unset or unparsable.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
